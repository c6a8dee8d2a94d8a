use std::{collections::HashSet, time::Duration};

use lifegrid::Cell;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in interactive console mode");
        opts.optopt("o", "output", "write final pattern to file", "FILE");
        opts.optopt("i", "input", "read starting pattern from file", "FILE");
        opts.optopt("w", "width", "set board width", "WIDTH");
        opts.optopt("h", "height", "set board height", "HEIGHT");
        opts.optopt("f", "fill", "set fill type", "TYPE");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = match opts.parse(args.iter().map(T::as_ref)) {
            Ok(matches) => matches,
            Err(err) => {
                eprintln!("{}", err);
                return None;
            }
        };
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifegrid [options]"));
            None
        } else {
            Some(Self { matches })
        }
    }
    pub fn from_env() -> Option<Self> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn width(&self) -> Option<i32> {
        self.matches.opt_get("width").unwrap()
    }
    fn height(&self) -> Option<i32> {
        self.matches.opt_get("height").unwrap()
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }

    pub fn generations(&self) -> u64 {
        self.matches.opt_get("gens").unwrap().unwrap_or(u64::MAX) // kinda hacky way of saying "infinity"
    }
    pub fn sleep(&self) -> Option<Duration> {
        match self.matches.opt_get("sleep").unwrap() {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(100)),
            None => None,
        }
    }

    pub fn board_size(&self) -> (i32, i32) {
        let default = if self.console() {
            let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
            // bottom row is reserved for the status line
            (cols as i32, (rows as i32 - 1).max(1))
        } else {
            (500, 500)
        };

        (
            self.width().unwrap_or(default.0).max(1),
            self.height().unwrap_or(default.1).max(1),
        )
    }
    pub fn fill_mode(&self) -> FillMode {
        let mode_str = self.matches.opt_str("fill");
        FillMode::new(mode_str.as_deref().unwrap_or("empty")).expect("valid fill mode string")
    }

    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }
    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}

pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    fn fill_cell<R: rand::Rng>(&self, cell: Cell, rng: &mut R) -> bool {
        match self {
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (cell.row + cell.col) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        }
    }

    pub fn create_living(self, width: i32, height: i32) -> HashSet<Cell> {
        let mut living = HashSet::new();
        if matches!(self, Self::Empty) {
            return living;
        }

        let mut rng = rand::rng();
        for row in 0..height {
            for col in 0..width {
                let cell = Cell::new(row, col);
                if self.fill_cell(cell, &mut rng) {
                    living.insert(cell);
                }
            }
        }
        living
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_fill(fill: &str) -> Args {
        Args::new(&["--fill", fill]).expect("args with fill")
    }

    #[test]
    fn fill_mode_parses() {
        let args = args_with_fill("alternating");

        assert!(matches!(args.fill_mode(), FillMode::Alternating));
    }

    #[test]
    fn create_living_all_fills_board() {
        let living = FillMode::All.create_living(3, 2);

        assert_eq!(living.len(), 6);
        assert!(living.contains(&Cell::new(1, 2)));
    }

    #[test]
    fn create_living_empty_is_empty() {
        let living = FillMode::Empty.create_living(5, 4);

        assert!(living.is_empty());
    }

    #[test]
    fn create_living_alternating_uses_parity() {
        let living = FillMode::Alternating.create_living(3, 3);

        let expected: HashSet<Cell> = [(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)]
            .into_iter()
            .map(|(r, c)| Cell::new(r, c))
            .collect();
        assert_eq!(living, expected);
    }

    #[test]
    fn create_living_random_is_within_bounds() {
        let w = 4;
        let h = 3;
        let living = FillMode::Random.create_living(w, h);

        assert!(living
            .iter()
            .all(|c| c.row >= 0 && c.col >= 0 && c.row < h && c.col < w));
    }
}
