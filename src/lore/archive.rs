use anyhow::Result;

use super::{Lore, LoreRequest, LoreSource};

/// Offline lore source with canned survey fragments.
///
/// Stands in for the remote generator in the demo binary and anywhere the
/// real service is not configured.
pub struct ArchiveLoreSource;

impl LoreSource for ArchiveLoreSource {
    fn generate_lore(&self, request: &LoreRequest) -> Result<Lore> {
        let mood = match request.time_label {
            "Deep Night" | "Night" => "a cold starlit silence",
            "Dawn" | "Dusk" => "long amber shadows",
            _ => "clear daylight",
        };
        Ok(Lore {
            title: format!("Echoes of the {}", request.biome.name()),
            content: format!(
                "The {} stands in {} here, humming with a memory older than the terrain around it.",
                request.landmark.to_lowercase(),
                mood
            ),
        })
    }
}
