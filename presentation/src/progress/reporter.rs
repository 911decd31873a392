//! Text progress for brightness fades
//!
//! Printed on stderr so `-get` style output on stdout stays clean.

use acpilight_application::FadeProgressNotifier;
use acpilight_domain::{ControllerInfo, FadePlan};
use colored::Colorize;

/// Reports each write of a fade, one line per step
pub struct FadeReporter;

impl FadeReporter {
    pub fn format_start(
        controller: &ControllerInfo,
        plan: &FadePlan,
        from: f64,
        to: f64,
    ) -> String {
        format!(
            "{} {} {:.2}% -> {:.2}% ({} steps over {}ms)",
            "->".cyan(),
            controller.name().bold(),
            from,
            to,
            plan.steps().max(1),
            plan.time().as_millis()
        )
    }

    pub fn format_step(step: usize, total: usize, percent: f64, raw: u64) -> String {
        format!("  [{}/{}] {:.2}% (raw {})", step, total, percent, raw)
    }

    pub fn format_complete(controller: &ControllerInfo) -> String {
        format!("  {} {}", "v".green(), controller.name())
    }
}

impl FadeProgressNotifier for FadeReporter {
    fn on_fade_start(&self, controller: &ControllerInfo, plan: &FadePlan, from: f64, to: f64) {
        eprintln!("{}", Self::format_start(controller, plan, from, to));
    }

    fn on_step(&self, step: usize, total: usize, percent: f64, raw: u64) {
        eprintln!("{}", Self::format_step(step, total, percent, raw));
    }

    fn on_fade_complete(&self, controller: &ControllerInfo) {
        eprintln!("{}", Self::format_complete(controller));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lines_without_color() {
        colored::control::set_override(false);
        let controller =
            ControllerInfo::new("intel_backlight", "/sys/class/backlight/intel_backlight");
        let plan = FadePlan::new(200, 4, 0);

        assert_eq!(
            FadeReporter::format_start(&controller, &plan, 50.0, 80.0),
            "-> intel_backlight 50.00% -> 80.00% (4 steps over 200ms)"
        );
        assert_eq!(FadeReporter::format_step(2, 4, 65.0, 65), "  [2/4] 65.00% (raw 65)");
        assert_eq!(FadeReporter::format_complete(&controller), "  v intel_backlight");
    }

    #[test]
    fn test_instant_plan_reports_one_step() {
        colored::control::set_override(false);
        let controller = ControllerInfo::new("tpacpi::kbd_backlight", "/x");
        let line = FadeReporter::format_start(&controller, &FadePlan::instant(), 0.0, 100.0);
        assert!(line.ends_with("(1 steps over 0ms)"));
    }
}
