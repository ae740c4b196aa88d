use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use playing_card::{set_trait_collection, CardView, ContentSize, TextMeasurer, TraitCollection};
use serde::Deserialize;

/// The card shown at startup, read from a JSON file.
///
/// Every field is optional:
/// ```json
/// { "rank": 12, "suit": "♠", "face_up": true, "content_size": "ExtraLarge" }
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardConfig {
    pub rank: i32,
    pub suit: String,
    pub face_up: bool,
    pub content_size: ContentSize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            rank: 5,
            suit: String::from("♥️"),
            face_up: true,
            content_size: ContentSize::default(),
        }
    }
}

impl CardConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open card config '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid card config '{}'", path.display()))
    }

    pub fn apply<M: TextMeasurer>(&self, card: &mut CardView<M>) {
        card.set_rank(self.rank);
        card.set_suit(self.suit.as_str());
        card.set_face_up(self.face_up);
        set_trait_collection(
            card,
            TraitCollection {
                preferred_content_size: self.content_size,
            },
        );
    }
}
