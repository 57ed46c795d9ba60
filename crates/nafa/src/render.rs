//! Plain-text rendering of a journey plan for the terminal.

use std::fmt;

use crate::journey::{Journey, SensoryLevels};

const FILLED: char = '█';
const EMPTY: char = '░';

/// Render one sensory bar, e.g. `Noise: ███░░░░░░░ (3/10 - Low)`.
///
/// Levels above the scale are drawn as a full bar but printed as given.
#[must_use]
pub fn sensory_bar(label: &str, level: u8) -> String {
    let drawn = usize::from(level.min(SensoryLevels::MAX));
    let empty = usize::from(SensoryLevels::MAX) - drawn;
    format!(
        "{label}: {}{} ({level}/{} - {})",
        FILLED.to_string().repeat(drawn),
        EMPTY.to_string().repeat(empty),
        SensoryLevels::MAX,
        SensoryLevels::describe(level),
    )
}

/// Render the journey template as a multi-line plan.
#[must_use]
pub fn journey_plan(journey: &Journey) -> String {
    JourneyPlan(journey).to_string()
}

/// `Display` adapter for [`journey_plan`].
struct JourneyPlan<'a>(&'a Journey);

impl fmt::Display for JourneyPlan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let journey = self.0;
        let rule = "═".repeat(40);

        writeln!(f, "{rule}")?;
        writeln!(f, "JOURNEY: {}", journey.title)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Status: {}", journey.status)?;
        writeln!(f, "Estimated Time: {} minutes", journey.estimated_minutes)?;
        writeln!(f)?;
        writeln!(f, "ROUTE SEGMENTS:")?;

        for segment in &journey.segments {
            let levels = segment.sensory_levels;
            writeln!(f)?;
            writeln!(
                f,
                "  {} {}",
                segment.transport_mode.symbol(),
                segment.transport_mode
            )?;
            writeln!(f, "  {}", "─".repeat(36))?;
            writeln!(f, "  From: {}", segment.from_location)?;
            writeln!(f, "  To:   {}", segment.to_location)?;
            writeln!(f, "  Duration: {} minutes", segment.duration_minutes)?;
            if let Some(warning) = &segment.sensory_warning {
                writeln!(f, "    ⚠️  {warning}")?;
            }
            writeln!(f, "    Sensory Levels:")?;
            writeln!(f, "      {}", sensory_bar("Noise", levels.noise))?;
            writeln!(f, "      {}", sensory_bar("Light", levels.light))?;
            writeln!(f, "      {}", sensory_bar("Crowd", levels.crowd))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensory_bar() {
        assert_eq!(sensory_bar("Noise", 3), "Noise: ███░░░░░░░ (3/10 - Low)");
        assert_eq!(sensory_bar("Crowd", 0), "Crowd: ░░░░░░░░░░ (0/10 - Very Low)");
        assert_eq!(
            sensory_bar("Light", 10),
            "Light: ██████████ (10/10 - Very High)"
        );
    }

    #[test]
    fn test_sensory_bar_clamps_drawing() {
        let bar = sensory_bar("Noise", 14);
        assert!(bar.starts_with("Noise: ██████████ "));
        assert!(bar.contains("(14/10 - Very High)"));
    }

    #[test]
    fn test_journey_plan_contents() {
        let plan = journey_plan(&Journey::sample());

        assert!(plan.contains("JOURNEY: Morning Commute to Central Library"));
        assert!(plan.contains("Status: Planning"));
        assert!(plan.contains("Estimated Time: 35 minutes"));
        assert!(plan.contains("From: Oak Street Bus Stop"));
        assert!(plan.contains("Rush hour: expect moderate crowding"));
        assert!(plan.contains("Noise: ████████░░ (8/10 - High)"));
    }

    #[test]
    fn test_journey_plan_segment_order() {
        let plan = journey_plan(&Journey::sample());
        let home = plan.find("From: Home").unwrap();
        let station = plan.find("From: City Center Station").unwrap();
        assert!(home < station);
    }

    #[test]
    fn test_plan_starts_and_ends_on_line_boundaries() {
        let plan = journey_plan(&Journey::sample());
        assert!(plan.starts_with(&"═".repeat(40)));
        assert!(plan.ends_with("(5/10 - Moderate)\n"));
        assert!(!plan.contains("\n\n\n"));
    }

    #[test]
    fn test_warning_only_when_present() {
        let plan = journey_plan(&Journey::sample());
        assert_eq!(plan.matches("⚠️").count(), 2);
    }
}
