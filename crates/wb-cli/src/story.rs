//! The demo story shipped with the terminal frontend.
//!
//! A compact graph from the town gate of Dustgate to the beacon on the High
//! Pass. Real gamebook content would come from an external database behind
//! the same node API; this set exists so the binary is playable out of the
//! box and exercises every engine feature.

use wb_core::{Codeword, ItemKind, NodeId, PlayerState, SkillKind};
use wb_engine::{Choice, ChoiceKind, NodeKind, StoryGraph, StoryNode};

/// Build the demo story graph.
pub fn graph() -> StoryGraph {
    let mut graph = StoryGraph::new();
    for node in nodes() {
        graph.insert(node).expect("demo node ids are unique");
    }
    graph
}

/// The playable character presets.
pub fn characters() -> Vec<PlayerState> {
    vec![
        PlayerState::new(
            "Rhianne",
            "wayfarer",
            "A wayfarer of the dust roads, sword-hand for hire.",
            10,
        )
        .with_money(15)
        .with_skills(&[
            SkillKind::Swordplay,
            SkillKind::Stealth,
            SkillKind::Wilderness,
            SkillKind::Diplomacy,
        ])
        .with_items(&[
            ItemKind::Sword,
            ItemKind::Lantern,
            ItemKind::Provisions,
            ItemKind::Provisions,
            ItemKind::Waterskin,
        ]),
        PlayerState::new(
            "Kestrel",
            "sea_thief",
            "A thief off the grey water, quick of finger and eye.",
            9,
        )
        .with_money(20)
        .with_skills(&[
            SkillKind::Thievery,
            SkillKind::Seafaring,
            SkillKind::Archery,
            SkillKind::Lore,
        ])
        .with_items(&[
            ItemKind::Bow,
            ItemKind::Dagger,
            ItemKind::DriedFish,
            ItemKind::Rope,
            ItemKind::FishingNet,
        ]),
    ]
}

fn nodes() -> Vec<StoryNode> {
    vec![
        StoryNode::new(
            0,
            "Dustgate. The road you have walked for nine days ends at a town \
             of salt-stained timber, pressed between the hills and the grey \
             water. Guards in harbor livery watch the gate.",
        )
        .with_image("dustgate.png")
        .with_farewell("The dust of the road settles behind you.")
        .with_choice(Choice::new("Walk through the gate", 10))
        .with_choice(
            Choice::new("Slip along the wall and over", 20)
                .with_kind(ChoiceKind::Skill(SkillKind::Stealth)),
        )
        .with_choice(
            Choice::new("Show the brass key to the guards", 30)
                .with_kind(ChoiceKind::Item(ItemKind::BrassKey)),
        ),
        StoryNode::new(
            10,
            "The tollkeeper leans from his booth, palm out. Behind him the \
             crowd shoulders through the arch.",
        )
        .with_choice(Choice::new("Pay the toll", 40).with_kind(ChoiceKind::LoseMoney(5)))
        .with_choice(
            Choice::new("Push through the press of bodies", 40).with_kind(ChoiceKind::Life(-1)),
        )
        .with_choice(Choice::new("Turn back into the dust", 0)),
        StoryNode::new(
            20,
            "You go up the wall in shadow and drop into a tanner's yard. \
             Nobody saw you, but the gulls did, and in Dustgate the gulls \
             are said to tell the wardens everything.",
        )
        .on_event(|s| s.add_codeword(Codeword::Gull))
        .with_choice(Choice::new("Cross the yard into the streets", 40)),
        StoryNode::new(
            30,
            "The guards go quiet at the sight of the key and wave you down a \
             stair into a cellar of untagged goods. \"Take what the key is \
             owed,\" one mutters, \"and be gone by dark.\"",
        )
        .with_take(
            &[ItemKind::SilverIdol, ItemKind::CrystalOrb, ItemKind::HealingSalve],
            2,
        )
        .with_choice(Choice::new("Climb back to the street", 40)),
        StoryNode::new(
            40,
            "Market Rows. Awnings snap in the wind off the water. A trader \
             with ring-scarred knuckles sizes up your gear.",
        )
        .with_image("market.png")
        .with_ware(ItemKind::Provisions, 2)
        .with_ware(ItemKind::Rope, 3)
        .with_ware(ItemKind::Lantern, 4)
        .with_ware(ItemKind::HealingSalve, 6)
        .with_trade(ItemKind::FishingNet, ItemKind::FurCloak)
        .with_choice(Choice::new("Head for the harbor", 50))
        .with_choice(Choice::new("Visit the shrine of the Deep", 60))
        .with_choice(Choice::new("Rest at the wayfarers' camp", 70)),
        // Routing only: the harbor plays out differently if the gulls saw
        // you come over the wall.
        StoryNode::new(50, "").on_background(|s| {
            Some(if s.has_codeword(Codeword::Gull) {
                NodeId(51)
            } else {
                NodeId(52)
            })
        }),
        StoryNode::new(
            51,
            "The harbor. Wardens idle by every gangway, and more than one \
             pair of eyes follows you along the quay. The Grey Tern is \
             loading at the far pier.",
        )
        .with_choice(
            Choice::new("Talk your way past the wardens", 80)
                .with_kind(ChoiceKind::Skill(SkillKind::Diplomacy)),
        )
        .with_choice(
            Choice::new("Go through the water, under the pilings", 80).with_kind(
                ChoiceKind::SkillAny {
                    skill: SkillKind::Seafaring,
                    tools: vec![ItemKind::Rope, ItemKind::FishingNet],
                },
            ),
        )
        .with_choice(Choice::new("Bribe the pier watch", 80).with_kind(ChoiceKind::LoseMoney(8)))
        .with_choice(Choice::new("Back to the market", 40)),
        StoryNode::new(
            52,
            "The harbor. The Grey Tern is loading at the far pier, her \
             master taking passengers who look able to pay their way.",
        )
        .with_choice(
            Choice::new("Show the master the weight of your purse", 80)
                .with_kind(ChoiceKind::Money(10)),
        )
        .with_choice(Choice::new("Back to the market", 40)),
        StoryNode::new(
            60,
            "The shrine of the Deep is a cave of wet stone behind the fish \
             sheds. A priest tends a driftwood fire that never goes out.",
        )
        .with_choice(Choice::new("Give alms", 61).with_kind(ChoiceKind::Donate))
        .with_choice(
            Choice::new("Offer the silver idol", 62)
                .with_kind(ChoiceKind::LoseItem(ItemKind::SilverIdol)),
        )
        .with_choice(Choice::new("Back to the market", 40)),
        StoryNode::new(
            61,
            "The priest takes your coin without counting it and signs the \
             wave over you. Warmth settles on your shoulders like a dry \
             cloak.",
        )
        .on_event(|s| s.blessed = true)
        .with_choice(Choice::new("Return to the market", 40)),
        StoryNode::new(
            62,
            "The priest sets the idol among the coals, where it does not \
             melt. \"The harbor remembers its own,\" he says, and marks \
             your brow with ash.",
        )
        .on_event(|s| {
            s.blessed = true;
            s.add_codeword(Codeword::Harbor);
        })
        .with_choice(Choice::new("Return to the market", 40)),
        StoryNode::new(
            70,
            "The wayfarers' camp outside the wall. A shared pot hangs over \
             the fire, and a circle of carters rattles dice on a board \
             scratched with ticks and crosses.",
        )
        .with_choice(Choice::new("Share the evening meal", 71).with_kind(ChoiceKind::Eat {
            threshold: 2,
        }))
        .with_choice(Choice::new("Sit with the dice players", 75))
        .with_choice(Choice::new("Back to the market", 40)),
        StoryNode::new(
            71,
            "Morning comes grey and cold. The camp is already folding its \
             tents.",
        )
        .with_choice(Choice::new("Walk back to the market", 40)),
        StoryNode::new(
            75,
            "The carters make room on the bench. The game is ticks and \
             crosses, a copper a throw, and the board never seems to favor \
             the same player twice.",
        )
        .on_event(|s| s.ticks += 1)
        .with_choice(Choice::new("Throw again", 76))
        .with_choice(Choice::new("Leave the game", 70)),
        // Routing only: three throws win the pot.
        StoryNode::new(76, "").on_background(|s| {
            Some(if s.ticks >= 3 { NodeId(77) } else { NodeId(75) })
        }),
        StoryNode::new(
            77,
            "Your third throw comes up all crosses. The carters groan and \
             push the pot across the board.",
        )
        .on_event(|s| {
            s.gain_money(10);
            s.cross += 1;
            s.ticks = 0;
        })
        .with_choice(Choice::new("Pocket the winnings and go", 40)),
        StoryNode::new(
            80,
            "Aboard the Grey Tern. The master points you to a coil of rope \
             amidships and tells you to stay out of the rigging. The cook \
             eyes your hollow cheeks.",
        )
        .with_image("grey_tern.png")
        .with_choice(
            Choice::new("Let the cook feed you up", 81)
                .with_kind(ChoiceKind::EatHeal { amount: 3 }),
        )
        .with_choice(Choice::new("Sail for the Drowned Teeth", 90)),
        StoryNode::new(
            81,
            "Fish broth, hard bread, and the galley's warmth. You feel \
             mended.",
        )
        .with_choice(Choice::new("Sail for the Drowned Teeth", 90)),
        StoryNode::new(
            90,
            "The Drowned Teeth. Black rock stands out of a running sea, and \
             the storm comes down on the Tern like a dropped net. A line \
             parts; the boom swings; the deck goes out from under you.",
        )
        .on_event(|s| s.gain_life(-2))
        .with_choice(Choice::new("Cling to the mast and ride it out", 100))
        .with_choice(
            Choice::new("Cut the fouled lines before the mast goes", 101).with_kind(
                ChoiceKind::SkillItem {
                    skill: SkillKind::Seafaring,
                    tool: ItemKind::Dagger,
                },
            ),
        )
        .with_choice(
            Choice::new("Swear your art away to the sea-god for passage", 101)
                .with_kind(ChoiceKind::LoseSkills { count: 2 }),
        ),
        StoryNode::new(
            100,
            "The Tern goes onto the rocks and you go into the water. You \
             wake on a strand of grey shingle, ringed by wreckers with \
             boat-hooks.",
        )
        .with_choice(Choice::new("Surrender everything you carry", 110).with_kind(ChoiceKind::LoseAll))
        .with_choice(
            Choice::new("Stand and fight them off", 111)
                .with_kind(ChoiceKind::Skill(SkillKind::Swordplay)),
        ),
        StoryNode::new(
            101,
            "The Tern limps through the gap with her mast standing. On the \
             far side the storm breaks, and a light burns high on the \
             headland.",
        )
        .on_event(|s| s.add_codeword(Codeword::Beacon))
        .with_choice(Choice::new("Make landfall at the old pier", 120)),
        StoryNode::new(
            110,
            "The wreckers strip you to the clothes you stand in and leave \
             you the shingle. Inland, a track climbs toward the pass.",
        )
        .with_choice(Choice::new("Walk inland", 120)),
        StoryNode::new(
            111,
            "Steel in your hand and your back to the sea, you are more \
             trouble than a drowned stranger is worth. The wreckers melt \
             away among the rocks, leaving their lantern in the shingle.",
        )
        .with_choice(
            Choice::new("Take the wreckers' lantern", 120)
                .with_kind(ChoiceKind::GetItem(ItemKind::Lantern)),
        )
        .with_choice(Choice::new("Leave it burning and walk inland", 120)),
        StoryNode::new(
            120,
            "The track to the pass is held by bandits in sea-cloaks. Their \
             chief turns your belongings over with a stick, settling on \
             whatever glitters.",
        )
        .with_lose(
            &[
                ItemKind::SilverIdol,
                ItemKind::CrystalOrb,
                ItemKind::BrassKey,
                ItemKind::FurCloak,
            ],
            1,
        )
        .with_choice(Choice::new("Go on into the hills", 130))
        .with_choice(
            Choice::new("Offer the chief a gift of your choosing", 133).with_kind(
                ChoiceKind::Gift {
                    table: vec![
                        (ItemKind::SilverIdol, NodeId(131)),
                        (ItemKind::DriedFish, NodeId(132)),
                    ],
                },
            ),
        )
        .with_choice(Choice::new("Draw steel against the whole band", 180)),
        StoryNode::new(
            130,
            "The High Pass. Wind off the snowfields cuts through cloth and \
             skin alike. Above, on the crag, stands the beacon tower of the \
             harbor wardens; below, a goat track drops away into scree. A \
             grey spring rises by the path, and beside it squats the hag of \
             the pass, grinning.",
        )
        .with_image("high_pass.png")
        .with_choice(
            Choice::new("Climb the crag to the beacon tower", 140)
                .with_kind(ChoiceKind::AllItems(vec![ItemKind::Rope, ItemKind::Lantern])),
        )
        .with_choice(Choice::new("Take the goat track down", 141))
        .with_choice(
            Choice::new("Speak the word the priest gave you", 142)
                .with_kind(ChoiceKind::Codeword(Codeword::Harbor)),
        )
        .with_choice(Choice::new("Sit at the hag's fire", 160))
        .with_choice(Choice::new("Drink from the grey spring", 170)),
        StoryNode::new(
            131,
            "The chief turns the idol in the light for a long time, then \
             laughs and presses a purse into your hands. \"The Deep's own \
             silver. Walk where you like, friend.\"",
        )
        .on_event(|s| s.gain_money(15))
        .with_choice(Choice::new("Walk on to the pass", 130)),
        StoryNode::new(
            132,
            "The chief shares the fish around the fire and the bandits make \
             a place for you until the wind drops.",
        )
        .with_choice(Choice::new("Walk on to the pass", 130)),
        StoryNode::new(
            133,
            "The chief shrugs and pockets it unexamined. \"Road's that \
             way.\"",
        )
        .with_choice(Choice::new("Walk on to the pass", 130)),
        StoryNode::new(
            140,
            "Rope and lantern-light get you up the crag in the dark. At the \
             top you set your lamp to the great fire-basket, and the beacon \
             of the High Pass burns for the first time in a generation. \
             Far below, the harbor answers with a light of its own. You \
             have come through.",
        )
        .with_kind(NodeKind::GoodEnding),
        StoryNode::new(
            141,
            "Halfway down, the goat track gives way and takes you with it.",
        )
        .on_event(|s| s.gain_life(-6))
        .with_choice(Choice::new("Crawl on down the scree", 143)),
        StoryNode::new(
            142,
            "You speak the word the priest marked you with, and a door \
             opens in the tower's foot where no door showed. The wardens \
             of the pass stand inside, lamps raised, as though they have \
             been waiting.",
        )
        .with_choice(Choice::new("Enter the wardens' door", 140)),
        StoryNode::new(
            143,
            "The scree at last runs out onto frozen turf. The beacon tower \
             stands far above you now, and the cold is in your bones.",
        )
        .with_choice(
            Choice::new("Climb back up toward the tower", 140).with_kind(ChoiceKind::Life(-3)),
        )
        .with_choice(Choice::new("Lie down in the snow, just for a while", 150)),
        StoryNode::new(
            150,
            "The snow is softer than any bed you have paid for. The wind \
             sounds almost like the harbor bells. You close your eyes.",
        )
        .with_kind(NodeKind::BadEnding),
        StoryNode::new(
            160,
            "The hag's fire burns without wood. \"Sit,\" she says, \"and \
             pay.\" What she takes is not carried in any pack: when you \
             stand, some of what you knew has gone into the fire, and \
             death has forgotten your name.",
        )
        .with_skill_loss(1)
        .on_event(|s| s.immortal = true)
        .with_choice(Choice::new("Walk on, changed", 130)),
        StoryNode::new(
            170,
            "The spring water is grey as the sky and tastes of iron. The \
             pass tilts, the light goes wrong, and you wake with your face \
             in the dust of the road, nine days out of Dustgate, as though \
             none of it had happened yet.",
        )
        .with_kind(NodeKind::Restart),
        StoryNode::new(
            180,
            "They are eleven and you are one. They bury you by the road, \
             under a cairn of the glittering things they kept.",
        )
        .with_kind(NodeKind::Doom),
    ]
}
