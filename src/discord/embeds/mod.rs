//! Summary embed for a summoner lookup.

use poise::serenity_prelude::{Colour, CreateEmbed, CreateEmbedFooter};

use crate::profile::{MasteryEntry, RankEntry, SummonerReport};
use crate::riot::Region;

const EMBED_COLOUR: Colour = Colour::new(0xFFD500);

/// Custom server emojis, indexed by mastery level - 1.
const MASTERY_GLYPHS: [&str; 7] = [
    ":lvl1:", ":lvl2:", ":lvl3:", ":lvl4:", ":lvl5:", ":lvl6:", ":lvl7:",
];

/// `(name, value, inline)` as accepted by [`CreateEmbed::fields`].
pub type EmbedField = (String, String, bool);

impl SummonerReport {
    pub fn fields(&self) -> Vec<EmbedField> {
        let mut fields = vec![(
            "op.gg".to_string(),
            opgg_url(self.region, &self.profile.name),
            false,
        )];

        if self.ranks.is_empty() {
            fields.push((
                "Not found".to_string(),
                "Player hasn't any ranked status.".to_string(),
                false,
            ));
            return fields;
        }

        // Every queue block lists the same top champions, no placeholders.
        for rank in &self.ranks {
            fields.push(rank_field(rank));
            fields.extend(self.masteries.iter().take(3).map(mastery_field));
        }

        fields
    }

    pub fn into_embed(self) -> CreateEmbed {
        let fields = self.fields();

        let mut embed = CreateEmbed::new()
            .title(self.profile.name)
            .description(self.profile.level)
            .colour(EMBED_COLOUR)
            .thumbnail(self.profile.icon_url)
            .fields(fields);

        // Best champion's portrait next to its name
        if let Some(main) = self.masteries.into_iter().next() {
            embed = embed.footer(CreateEmbedFooter::new(main.champion).icon_url(main.icon_url));
        }

        embed
    }
}

fn rank_field(rank: &RankEntry) -> EmbedField {
    (
        rank.queue.to_string(),
        format!(
            "{} {} • LP: {} • Wygrane: {} • Przegrane: {}",
            rank.tier, rank.division, rank.league_points, rank.wins, rank.losses
        ),
        false,
    )
}

fn mastery_field(mastery: &MasteryEntry) -> EmbedField {
    (
        format!("{} {}", mastery.champion, mastery_glyph(mastery.level)),
        format!(
            "• Punkty: {}\n• Maestria: {}",
            format_points(mastery.points),
            mastery.level
        ),
        true,
    )
}

pub fn opgg_url(region: Region, summoner_name: &str) -> String {
    format!(
        "https://www.op.gg/summoners/{}/{}",
        region.code(),
        summoner_name.replace(' ', "%20")
    )
}

/// Emoji for a mastery level, empty outside of 1..=7.
pub fn mastery_glyph(level: i32) -> &'static str {
    usize::try_from(level)
        .ok()
        .and_then(|level| level.checked_sub(1))
        .and_then(|index| MASTERY_GLYPHS.get(index))
        .copied()
        .unwrap_or("")
}

/// Thousands shorthand: `123456` becomes `"123 K"`. Values under a thousand
/// are shown as they are.
pub fn format_points(points: i64) -> String {
    if points >= 1_000 {
        format!("{} K", points / 1_000)
    } else {
        points.to_string()
    }
}
