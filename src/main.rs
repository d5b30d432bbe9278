//! Spatial Layout entry point
//!
//! Native: prints a JSON report of the honeycomb positions, a cover-flow
//! strip and the radial front item for a settings file or preset.
//!
//! Usage: `spatial-layout [settings.json | preset] [item_count]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use serde::Serialize;

    use spatial_layout::animate::AngleStepper;
    use spatial_layout::layout::{Slot, compute_slots};
    use spatial_layout::transform::ProximityOutput;
    use spatial_layout::platform::checked_item_count;
    use spatial_layout::{LayoutError, Preset, Result, Settings};

    #[derive(Serialize)]
    struct Report {
        preset: Preset,
        ring_distance: f64,
        extent: f64,
        honeycomb: Vec<Slot>,
        strip: Vec<ProximityOutput>,
        radial_front_index: usize,
        /// Front item after one angle step
        radial_next_front_index: usize,
    }

    fn load_settings(arg: Option<&str>) -> Result<Settings> {
        match arg {
            None => Ok(Settings::default()),
            Some(name) => match Preset::from_str(name) {
                Some(preset) => {
                    log::info!("Using preset {}", preset.as_str());
                    Ok(Settings::from_preset(preset))
                }
                None => Settings::load(name),
            },
        }
    }

    /// Parse the item count argument; negative and non-numeric counts are errors
    fn parse_count(arg: &str) -> Result<usize> {
        let count = arg
            .trim()
            .parse::<i64>()
            .map_err(|_| LayoutError::InvalidItemCount(arg.to_string()))?;
        checked_item_count(count)
    }

    pub fn run() -> Result<()> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut settings = load_settings(args.first().map(String::as_str))?;
        if let Some(count) = args.get(1) {
            settings.item_count = parse_count(count)?;
        }

        let config = settings.honeycomb;
        let ring_count = settings.radial.item_count;
        let mut stepper = AngleStepper::new(settings.radial.angle_step_degrees)?;
        let radial_front_index = stepper.focus(ring_count)?.front_index();
        stepper.advance();
        let report = Report {
            preset: settings.preset,
            ring_distance: config.ring_distance(),
            extent: config.extent(settings.item_count),
            honeycomb: compute_slots(settings.item_count, &config)?,
            strip: settings.strip.transforms(settings.strip_count, 0.0)?,
            radial_front_index,
            radial_next_front_index: stepper.focus(ring_count)?.front_index(),
        };
        log::info!(
            "Laid out {} honeycomb items, {} strip items",
            report.honeycomb.len(),
            report.strip.len()
        );

        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Entry points are exported from the library (platform::web)
}
