use tracing::instrument;

use crate::discord::bot::Context;
use crate::discord::handler::{APOLOGY, LookupReply, lookup};
use crate::error::AppError;
use crate::riot::Region;

/// `!<region> <summoner name>`, e.g. `!euw Le Conservateur`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCommand {
    pub region: Region,
    pub summoner_name: String,
}

impl LookupCommand {
    /// Builds the lookup from the command word the user typed and whatever
    /// followed it. Name tokens are rejoined with single spaces; the name may
    /// end up empty.
    pub fn from_invocation(command_name: &str, rest: Option<&str>) -> Result<Self, AppError> {
        let region = command_name.parse::<Region>()?;
        let summoner_name = rest
            .unwrap_or_default()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Self {
            region,
            summoner_name,
        })
    }
}

/// Show the profile, ranks and best champions of a summoner
#[poise::command(
    prefix_command,
    rename = "br",
    aliases(
        "eune", "euw", "jp", "kr", "la1", "la2", "na", "oc", "tr", "ru", "ph", "sg", "th", "tw",
        "vn"
    )
)]
#[instrument(skip(ctx), fields(user_id = %ctx.author().id))]
pub async fn region_lookup(
    ctx: Context<'_>,
    #[rest] summoner_name: Option<String>,
) -> Result<(), AppError> {
    let command =
        LookupCommand::from_invocation(ctx.invoked_command_name(), summoner_name.as_deref())?;

    match lookup(&ctx.data().riot, command.region, &command.summoner_name).await {
        LookupReply::Summary(embed) => {
            ctx.send(poise::CreateReply::default().embed(*embed)).await?;
        }
        LookupReply::Apology => {
            ctx.say(APOLOGY).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_is_a_command_word() {
        let command = region_lookup();
        let mut words = vec![command.name.to_string()];
        words.extend(command.aliases.iter().map(|alias| alias.to_string()));

        assert_eq!(words.len(), Region::ALL.len());
        for region in Region::ALL {
            assert!(
                words.contains(&region.code().to_lowercase()),
                "missing command for {region}"
            );
        }
    }

    #[test]
    fn command_word_selects_region_case_insensitively() {
        let command = LookupCommand::from_invocation("EuNe", Some("someone")).unwrap();

        assert_eq!(
            command,
            LookupCommand {
                region: Region::Eune,
                summoner_name: "someone".into(),
            }
        );
    }

    #[test]
    fn name_tokens_are_rejoined_with_single_spaces() {
        let command =
            LookupCommand::from_invocation("euw", Some("  Le    Conservateur\n ")).unwrap();

        assert_eq!(command.summoner_name, "Le Conservateur");
    }

    #[test]
    fn bare_command_keeps_an_empty_name() {
        for rest in [None, Some(""), Some("    ")] {
            let command = LookupCommand::from_invocation("na", rest).unwrap();
            assert_eq!(command.region, Region::Na);
            assert_eq!(command.summoner_name, "", "rest {rest:?}");
        }
    }

    #[test]
    fn unknown_command_word_is_an_invalid_region() {
        let res = LookupCommand::from_invocation("oce", Some("FakerFan123"));

        assert!(matches!(res, Err(AppError::InvalidRegion(_))));
    }
}
