//! Named lifecycle hooks.

use std::{fmt, str::FromStr};

/// Lifecycle points the deployment agent calls into, around its own
/// unpack/install step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum LifecycleHook {
    /// Before the new bundle is unpacked: stop the service, ensure the target directory.
    PreInstall,
    /// After the new bundle is unpacked: reload, start, verify.
    PostInstall,
}

impl LifecycleHook {
    /// Every hook, in the order the agent invokes them.
    pub const ALL: [LifecycleHook; 2] = [Self::PreInstall, Self::PostInstall];

    /// Hook name as used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreInstall => "pre-install",
            Self::PostInstall => "post-install",
        }
    }

    /// File name of the hook script under the bundle's `scripts/`.
    pub fn script_name(&self) -> &'static str {
        match self {
            Self::PreInstall => "pre-install.sh",
            Self::PostInstall => "post-install.sh",
        }
    }
}

impl fmt::Display for LifecycleHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleHook {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| format!("unknown lifecycle hook: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for hook in LifecycleHook::ALL {
            assert_eq!(hook.as_str().parse::<LifecycleHook>().unwrap(), hook);
            assert!(hook.script_name().starts_with(hook.as_str()));
        }
        assert!("application-start".parse::<LifecycleHook>().is_err());
    }
}
