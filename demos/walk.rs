use grid_navigation::{Coord, GridError, Navigator, NavigatorConfig, PlacementMode};

// Drives a navigator without any rendering: builds a wall, lets the agent walk
// for a while, then sends it somewhere else and prints every frame.

const FRAME_TIME: f32 = 1.0 / 30.0;

fn print_frame(navigator: &Navigator) {
    let agent = navigator.agent().position();
    let rows = navigator.grid().to_string();
    for (y, row) in rows.lines().enumerate() {
        let line = row
            .chars()
            .enumerate()
            .map(|(x, ch)| {
                let pos = Coord::new(x as i32, y as i32);
                if agent == Some(pos) {
                    '@'
                } else if ch == '.' && navigator.route().contains(&pos) {
                    '*'
                } else {
                    ch
                }
            })
            .collect::<String>();
        println!("{}", line);
    }
    println!("{}\n", navigator.status());
}

fn main() -> Result<(), GridError> {
    env_logger::init();
    let config = NavigatorConfig::default()
        .with_size(12, 8)
        .with_diagonal(true)
        .with_step_interval(0.2);
    let mut navigator = Navigator::new(&config)?;
    for y in 0..6 {
        navigator.primary_action(Coord::new(6, y))?;
    }
    print_frame(&navigator);

    let mut frames = 0;
    while !navigator.agent().has_reached_destination() {
        navigator.update(FRAME_TIME);
        frames += 1;
        if frames == 40 {
            navigator.set_mode(PlacementMode::Navigate);
            navigator.primary_action(Coord::new(11, 0))?;
            print_frame(&navigator);
        }
        if frames % 15 == 0 {
            print_frame(&navigator);
        }
    }
    print_frame(&navigator);
    println!("Arrived after {} frames", frames);
    Ok(())
}
