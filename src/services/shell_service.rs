//! The static landing "page": hero copy, feature cards, achievement badges
//! and footer. Pure literals; nothing here ever changes at runtime.

use lazy_static::lazy_static;

use crate::models::Achievement;

pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

lazy_static! {
    pub static ref ACHIEVEMENTS: Vec<Achievement> = vec![
        Achievement::new(1, "First Batch", false),
        Achievement::new(2, "Gas Saver", false),
        Achievement::new(3, "EIP-7702 Pioneer", true),
    ];
    static ref FEATURES: Vec<FeatureCard> = vec![
        FeatureCard {
            title: "EIP-7702 Native",
            description: "Built specifically for EIP-7702 account abstraction standard",
        },
        FeatureCard {
            title: "Smart Batching",
            description: "Intelligent transaction bundling for optimal gas efficiency",
        },
        FeatureCard {
            title: "Gasless UX",
            description: "Seamless user experience with paymaster integration",
        },
    ];
}

const BENEFITS: [&str; 3] = [
    "Zero gas fees for users",
    "Intelligent transaction batching",
    "EIP-7702 account abstraction",
];

/// Render the landing page shell.
pub fn render_home() -> String {
    let mut out = String::new();

    out.push_str("  ● EIP-7702 Enabled\n\n");
    out.push_str("  ═══════════════  OHMY7702  ═══════════════\n\n");
    out.push_str(
        "  Experience the future of Web3 with gasless and batching\n  \
         transactions powered by EIP-7702\n\n",
    );

    out.push_str("  Batch & Save with Paymaster\n");
    out.push_str(
        "  Bundle multiple transactions into a single batch and let our\n  \
         paymaster cover the gas fees. Experience true gasless transactions\n  \
         with EIP-7702 account abstraction.\n\n",
    );
    for benefit in BENEFITS {
        out.push_str(&format!("    ✔ {}\n", benefit));
    }
    out.push('\n');

    out.push_str("  Your Achievements\n");
    for achievement in ACHIEVEMENTS.iter() {
        let badge = if achievement.unlocked {
            "☑ Unlocked!"
        } else {
            "○ Locked"
        };
        out.push_str(&format!("    {:<20} {}\n", achievement.name, badge));
    }
    out.push('\n');

    out.push_str("  Why Choose Ohmy7702?\n");
    for feature in FEATURES.iter() {
        out.push_str(&format!(
            "    {:<16} - {}\n",
            feature.title, feature.description
        ));
    }
    out.push('\n');

    out.push_str("  Built with EIP-7702 • Powered by Paymaster • Next-Gen Web3\n");
    out.push_str("  Type $help for commands, $queue to see the transaction queue.\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievements_fixed_content() {
        assert_eq!(ACHIEVEMENTS.len(), 3);
        let unlocked: Vec<&str> = ACHIEVEMENTS
            .iter()
            .filter(|a| a.unlocked)
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(unlocked, vec!["EIP-7702 Pioneer"]);
    }

    #[test]
    fn test_home_renders_all_sections() {
        let home = render_home();
        assert!(home.contains("OHMY7702"));
        assert!(home.contains("Batch & Save with Paymaster"));
        assert!(home.contains("EIP-7702 Pioneer"));
        assert!(home.contains("Unlocked!"));
        assert!(home.contains("Smart Batching"));
        assert!(home.contains("Zero gas fees for users"));
    }
}
