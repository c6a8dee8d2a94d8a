use std::time::Instant;

pub trait Recorder {
    fn record(&mut self, alive: usize);

    fn has_report(&self, always: bool) -> bool;
    fn report(&mut self) -> String;
}

pub struct SimpleRecord {
    gens: u64,
    alive: usize,
    gens_in_report: u64,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            gens: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for SimpleRecord {
    fn record(&mut self, alive: usize) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    fn has_report(&self, always: bool) -> bool {
        always || self.last_report.elapsed().as_millis() >= 500
    }
    fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, alive:{}",
            gens_per_sec, self.gens, self.alive
        )
    }
}

/// Records per-generation timings for a `gen,delta_t,alive` csv dump.
pub struct CsvRecord {
    inner: SimpleRecord,
    data: Vec<(u128, usize)>,
    last: Instant,
}
impl CsvRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            inner: SimpleRecord::new(alive),
            data: Vec::new(),
            last: Instant::now(),
        }
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        use std::{
            fs,
            io::{self, Write},
        };

        let file = fs::File::create(path)?;
        let mut file = io::BufWriter::new(file);

        file.write_all(b"gen,delta_t,alive\n")?;
        for (i, (delta, alive)) in self.data.iter().enumerate() {
            let line = format!("{},{},{}\n", i, delta, alive);
            file.write_all(line.as_bytes())?;
        }
        file.flush()
    }
}
impl Recorder for CsvRecord {
    fn record(&mut self, alive: usize) {
        let delta = self.last.elapsed().as_micros();
        self.last = Instant::now();

        self.data.push((delta, alive));
        self.inner.record(alive);
    }

    fn has_report(&self, always: bool) -> bool {
        self.inner.has_report(always)
    }
    fn report(&mut self) -> String {
        self.inner.report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_tracks_generations_and_population() {
        let mut stats = SimpleRecord::new(4);
        stats.record(6);
        stats.record(5);

        let report = stats.report();
        assert!(report.contains("gens:2"));
        assert!(report.contains("alive:5"));
    }

    #[test]
    fn csv_keeps_one_row_per_generation() {
        let mut stats = CsvRecord::new(3);
        stats.record(8);
        stats.record(0);

        assert_eq!(stats.data.len(), 2);
        assert_eq!(stats.data[1].1, 0);
    }
}
