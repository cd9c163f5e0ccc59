//! Optional data selections for profile lookups
//!
//! XIVAPI attaches extra blocks to character and Free Company responses when
//! short codes are listed in the `data` query parameter. These builders map
//! the individual opt-in flags onto those codes and omit the parameter
//! entirely when nothing is selected.

use crate::Language;

/// Optional data to include with a character lookup
///
/// # Example
///
/// ```
/// use xivapi_client::CharacterOptions;
///
/// let options = CharacterOptions::default()
///     .with_achievements()
///     .with_minions_mounts();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterOptions {
    pub(crate) extended: bool,
    pub(crate) language: Language,
    achievements: bool,
    minions_mounts: bool,
    friends: bool,
    classjobs: bool,
    free_company: bool,
    free_company_members: bool,
    pvp_team: bool,
}

impl CharacterOptions {
    /// Request the extended response format
    pub fn extended(mut self) -> Self {
        self.extended = true;
        self
    }

    /// Set the response language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Include the character's achievements (`AC`)
    pub fn with_achievements(mut self) -> Self {
        self.achievements = true;
        self
    }

    /// Include minions and mounts (`MIMO`)
    pub fn with_minions_mounts(mut self) -> Self {
        self.minions_mounts = true;
        self
    }

    /// Include the friends list (`FR`)
    pub fn with_friends(mut self) -> Self {
        self.friends = true;
        self
    }

    /// Include class and job levels (`CJ`)
    pub fn with_classjobs(mut self) -> Self {
        self.classjobs = true;
        self
    }

    /// Include the character's Free Company (`FC`)
    pub fn with_free_company(mut self) -> Self {
        self.free_company = true;
        self
    }

    /// Include the Free Company member list (`FCM`)
    pub fn with_free_company_members(mut self) -> Self {
        self.free_company_members = true;
        self
    }

    /// Include the character's PvP team (`PVP`)
    pub fn with_pvp_team(mut self) -> Self {
        self.pvp_team = true;
        self
    }

    /// Comma-joined `data` parameter, or `None` when no flags are set
    pub(crate) fn data_param(&self) -> Option<String> {
        let mut codes = Vec::new();
        if self.achievements {
            codes.push("AC");
        }
        if self.minions_mounts {
            codes.push("MIMO");
        }
        if self.friends {
            codes.push("FR");
        }
        if self.classjobs {
            codes.push("CJ");
        }
        if self.free_company {
            codes.push("FC");
        }
        if self.free_company_members {
            codes.push("FCM");
        }
        if self.pvp_team {
            codes.push("PVP");
        }

        if codes.is_empty() {
            None
        } else {
            Some(codes.join(","))
        }
    }
}

/// Optional data to include with a Free Company lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeCompanyOptions {
    pub(crate) extended: bool,
    pub(crate) language: Language,
    members: bool,
}

impl FreeCompanyOptions {
    /// Request the extended response format
    pub fn extended(mut self) -> Self {
        self.extended = true;
        self
    }

    /// Set the response language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Include the member list (`FCM`)
    pub fn with_members(mut self) -> Self {
        self.members = true;
        self
    }

    /// Comma-joined `data` parameter, or `None` when no flags are set
    pub(crate) fn data_param(&self) -> Option<String> {
        if self.members {
            Some("FCM".to_string())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_data_param_empty() {
        assert_eq!(CharacterOptions::default().data_param(), None);
    }

    #[test]
    fn test_character_data_param_subset() {
        let options = CharacterOptions::default()
            .with_achievements()
            .with_minions_mounts();
        assert_eq!(options.data_param().as_deref(), Some("AC,MIMO"));
    }

    #[test]
    fn test_character_data_param_all_flags() {
        let options = CharacterOptions::default()
            .with_achievements()
            .with_minions_mounts()
            .with_friends()
            .with_classjobs()
            .with_free_company()
            .with_free_company_members()
            .with_pvp_team();
        assert_eq!(
            options.data_param().as_deref(),
            Some("AC,MIMO,FR,CJ,FC,FCM,PVP")
        );
    }

    #[test]
    fn test_character_extended_flag() {
        assert!(!CharacterOptions::default().extended);
        assert!(CharacterOptions::default().extended().extended);
    }

    #[test]
    fn test_freecompany_data_param() {
        assert_eq!(FreeCompanyOptions::default().data_param(), None);
        assert_eq!(
            FreeCompanyOptions::default().with_members().data_param().as_deref(),
            Some("FCM")
        );
    }
}
