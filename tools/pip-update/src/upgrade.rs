//! Running the actual upgrade

use cmd_common::runner::args;

use crate::error::UpdateResult;
use crate::pip::Pip;

/// Build the pip argument vector for the upgrade
///
/// TODO: the install is still passed --dry-run, so pip only reports what it
/// would upgrade; drop the flag once the flow has been vetted against a real
/// environment.
pub fn upgrade_args(packages: &[String], eager: bool) -> Vec<String> {
    let mut install_args = args(["install", "-U", "--dry-run"]);
    if eager {
        install_args.push("--upgrade-strategy=eager".to_string());
    }
    install_args.extend(packages.iter().cloned());
    install_args
}

/// Upgrade the given packages, streaming pip's output to the console
///
/// # Errors
///
/// A nonzero pip exit is fatal for the run.
pub async fn upgrade_packages(pip: &Pip, packages: &[String], eager: bool) -> UpdateResult<()> {
    pip.run(&upgrade_args(packages, eager)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packages() -> Vec<String> {
        vec!["pkgA".to_string(), "pkgB".to_string()]
    }

    #[test]
    fn packages_follow_the_install_flags_in_order() {
        assert_eq!(
            upgrade_args(&packages(), false),
            vec!["install", "-U", "--dry-run", "pkgA", "pkgB"]
        );
    }

    #[test]
    fn eager_strategy_is_inserted_before_the_packages() {
        assert_eq!(
            upgrade_args(&packages(), true),
            vec![
                "install",
                "-U",
                "--dry-run",
                "--upgrade-strategy=eager",
                "pkgA",
                "pkgB"
            ]
        );
    }
}
