use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Platform shards a summoner lookup can be routed to.
///
/// Each variant is also a chat command: `!euw <name>` resolves to [`Region::Euw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Br,
    Eune,
    Euw,
    Jp,
    Kr,
    La1,
    La2,
    Na,
    Oc,
    Tr,
    Ru,
    Ph,
    Sg,
    Th,
    Tw,
    Vn,
}

impl Region {
    pub const ALL: [Region; 16] = [
        Self::Br,
        Self::Eune,
        Self::Euw,
        Self::Jp,
        Self::Kr,
        Self::La1,
        Self::La2,
        Self::Na,
        Self::Oc,
        Self::Tr,
        Self::Ru,
        Self::Ph,
        Self::Sg,
        Self::Th,
        Self::Tw,
        Self::Vn,
    ];

    pub fn host(&self) -> &'static str {
        match self {
            Self::Br => "br1.api.riotgames.com",
            Self::Eune => "eun1.api.riotgames.com",
            Self::Euw => "euw1.api.riotgames.com",
            Self::Jp => "jp1.api.riotgames.com",
            Self::Kr => "kr.api.riotgames.com",
            Self::La1 => "la1.api.riotgames.com",
            Self::La2 => "la2.api.riotgames.com",
            Self::Na => "na1.api.riotgames.com",
            Self::Oc => "oc1.api.riotgames.com",
            Self::Tr => "tr1.api.riotgames.com",
            Self::Ru => "ru.api.riotgames.com",
            Self::Ph => "ph2.api.riotgames.com",
            Self::Sg => "sg2.api.riotgames.com",
            Self::Th => "th2.api.riotgames.com",
            Self::Tw => "tw2.api.riotgames.com",
            Self::Vn => "vn2.api.riotgames.com",
        }
    }

    pub fn base_url(&self) -> String {
        format!("https://{}", self.host())
    }

    /// Short code as typed by users and as used in op.gg links.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Br => "BR",
            Self::Eune => "EUNE",
            Self::Euw => "EUW",
            Self::Jp => "JP",
            Self::Kr => "KR",
            Self::La1 => "LA1",
            Self::La2 => "LA2",
            Self::Na => "NA",
            Self::Oc => "OC",
            Self::Tr => "TR",
            Self::Ru => "RU",
            Self::Ph => "PH",
            Self::Sg => "SG",
            Self::Th => "TH",
            Self::Tw => "TW",
            Self::Vn => "VN",
        }
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|region| region.code() == upper)
            .ok_or_else(|| AppError::InvalidRegion(s.to_string()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
