use crate::Cell;
use std::collections::HashSet;

pub trait PatternCodec {
    fn encode(self, living: &HashSet<Cell>) -> String;
    fn decode(self, value: &str) -> HashSet<Cell>;
}

struct RunEncoder {
    sequence: String,
    line_len: usize,
    max_line_len: usize,
}
impl RunEncoder {
    fn new(max_line_len: usize) -> Self {
        Self {
            sequence: String::new(),
            line_len: 0,
            max_line_len,
        }
    }

    fn push_run(&mut self, run: i32, c: char) {
        let append = match run {
            0 => String::new(),
            1 => c.to_string(),
            n => format!("{}{}", n, c),
        };
        if self.line_len + append.len() > self.max_line_len {
            self.sequence.push('\n');
            self.line_len = 0;
        }
        self.line_len += append.len();
        self.sequence.push_str(&append);
    }

    fn end(mut self) -> String {
        self.sequence.push('!');
        self.sequence
    }
}

/// The run-length-encoded pattern format: `o` for living runs, `b` for
/// dead runs, `$` for row breaks, `!` terminates the pattern.
pub struct RunLengthEncoded {
    name: Option<String>,
    header: bool,
}
impl RunLengthEncoded {
    pub fn set_name<T: AsRef<str>>(mut self, name: T) -> Self {
        self.name = Some(name.as_ref().to_owned());
        self
    }

    fn encode_header(&self, cells: &[Cell]) -> String {
        let mut header = String::new();
        if !self.header {
            return header;
        }
        if let Some(name) = &self.name {
            header.push_str(&format!("#N {}\n", name));
        }
        let cols = cells.iter().map(|c| c.col).max().map_or(0, |c| c + 1);
        let rows = cells.last().map_or(0, |c| c.row + 1);
        header.push_str(&format!("x = {}, y = {}, rule = 23/3", cols, rows));
        header
    }

    fn encode_cells(&self, cells: &[Cell]) -> String {
        // top-left of the pattern's bounding box
        let tl = Cell {
            col: cells.iter().map(|c| c.col).min().unwrap_or_default(),
            // cells are sorted row-major, so the first one has the lowest row
            row: cells.first().map(|c| c.row).unwrap_or_default(),
        };

        let mut last = tl - Cell::new(0, 1);
        let mut alive_run = 0;
        let mut seq = RunEncoder::new(70);
        for &cell in cells {
            // if we're one ahead of the last, then only extend the run
            if last.row == cell.row && (last.col + 1) == cell.col {
                alive_run += 1;
                last = cell;
                continue;
            }

            let rows_run = cell.row - last.row;
            let dead_run = match rows_run {
                0 => cell.col - last.col - 1,
                _ => cell.col - tl.col,
            };
            // NOTE: order matters!
            seq.push_run(alive_run, 'o');
            seq.push_run(rows_run, '$');
            seq.push_run(dead_run, 'b');

            alive_run = 1;
            last = cell;
        }

        seq.push_run(alive_run, 'o');
        seq.end()
    }
}
impl Default for RunLengthEncoded {
    fn default() -> Self {
        Self {
            name: None,
            header: true,
        }
    }
}

impl PatternCodec for RunLengthEncoded {
    fn encode(self, living: &HashSet<Cell>) -> String {
        let mut cells: Vec<Cell> = living.iter().copied().collect();
        cells.sort();
        format!(
            "{}\n{}\n",
            self.encode_header(&cells),
            self.encode_cells(&cells)
        )
    }

    fn decode(self, value: &str) -> HashSet<Cell> {
        let re = regex::Regex::new(r"(\d*)([bo$!])").unwrap();

        let mut living = HashSet::new();
        let mut cursor = Cell::new(0, 0);
        'lines_loop: for mut line in value.split('\n') {
            if let Some(i) = line.find('#') {
                line = &line[..i];
            }

            for (_, [run_str, state]) in re.captures_iter(line).map(|x| x.extract()) {
                let run = run_str.parse::<i32>().unwrap_or(1);
                match state {
                    "!" => break 'lines_loop,
                    "o" => {
                        for _ in 0..run {
                            living.insert(cursor);
                            cursor.col += 1;
                        }
                    }
                    "b" => cursor.col += run,
                    "$" => {
                        cursor.col = 0;
                        cursor.row += run;
                    }
                    _ => unreachable!(),
                }
            }
        }

        living
    }
}
