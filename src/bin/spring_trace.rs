// Spring trace
// Prints the tab indicator trajectory for one transition, frame by frame
//
// Usage: spring-trace [from] [to] [tab_count] [width]

use anyhow::{bail, Context, Result};
use portfolio_tui::AppSettings;
use tui_components::{TabIndicatorAnimator, TabLayout};

const MAX_FRAMES: usize = 600;

fn arg<T: std::str::FromStr>(args: &[String], index: usize, name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match args.get(index) {
        Some(raw) => raw.parse().with_context(|| format!("invalid {}: '{}'", name, raw)),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let from: usize = arg(&args, 0, "from", 0)?;
    let to: usize = arg(&args, 1, "to", 2)?;
    let tab_count: usize = arg(&args, 2, "tab_count", 3)?;
    let width: u16 = arg(&args, 3, "width", 90)?;

    if from >= tab_count || to >= tab_count {
        bail!("tab indices must be below tab_count ({})", tab_count);
    }

    let settings = AppSettings::default();
    let spring = settings.animation.spring();
    spring.validate()?;
    let frame = settings.ui.frame_interval;

    let mut animator = TabIndicatorAnimator::new(spring, from as f32);
    animator.retarget(to as f32);
    let layout = TabLayout::new(width, tab_count);

    println!(
        "=== SPRING (damping {}, stiffness {}, mass {}, ratio {:.3}) ===",
        spring.damping,
        spring.stiffness,
        spring.mass,
        spring.damping_ratio()
    );
    println!("{} -> {} across {} tabs, width {}, frame {:?}", from, to, tab_count, width, frame);
    println!();
    println!("{:>5}  {:>9}  {:>7}", "frame", "progress", "offset");

    let trajectory = animator.trajectory(frame, MAX_FRAMES);
    for (i, progress) in trajectory.iter().enumerate() {
        println!("{:>5}  {:>9.4}  {:>7.2}", i + 1, progress, layout.indicator_offset(*progress));
    }

    println!();
    println!(
        "settled after {} frames ({:?})",
        trajectory.len(),
        frame * trajectory.len() as u32
    );
    Ok(())
}
