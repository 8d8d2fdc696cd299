use std::str::FromStr;

use life::{pattern, Engine, Pattern};
use log::info;

const ROWS: i64 = 30;
const COLS: i64 = 30;
const GENERATIONS: u64 = 8;

fn main() -> Result<(), life::Error> {
    env_logger::init();
    let mut engine = Engine::new(ROWS, COLS)?;
    engine.place(&Pattern::from_str(pattern::GLIDER)?, 1, 1)?;
    engine.place(&Pattern::from_str(pattern::BLINKER)?, 20, 15)?;
    loop {
        info!(
            "generation {}: {} live cells",
            engine.generation(),
            engine.population()
        );
        println!("{engine}\n");
        if engine.generation() == GENERATIONS {
            break;
        }
        engine.advance();
    }
    Ok(())
}
