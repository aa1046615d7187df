use std::time::Instant;

/// Tracks generation throughput and live-cell counts.
///
/// Produces a one-line report on a 500ms cadence. When sampling is enabled,
/// every tick's duration and population is kept for a CSV dump at exit.
pub struct Recorder {
    gens: usize,
    alive: usize,
    gens_in_report: usize,
    last_report: Instant,
    samples: Option<Vec<(u128, usize)>>,
    last_record: Instant,
}
impl Recorder {
    pub fn new(alive: usize, sample: bool) -> Self {
        Self {
            gens: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
            samples: sample.then(Vec::new),
            last_record: Instant::now(),
        }
    }

    pub fn record(&mut self, alive: usize) {
        if let Some(ref mut samples) = self.samples {
            samples.push((self.last_record.elapsed().as_micros(), alive));
        }
        self.last_record = Instant::now();

        self.gens += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed().as_millis() >= 500
    }
    pub fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, alive:{}",
            gens_per_sec, self.gens, self.alive
        )
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        use std::{
            fs,
            io::{self, Write},
        };

        let samples = self.samples.as_deref().unwrap_or(&[]);
        let file = fs::File::create(path)?;
        let mut file = io::BufWriter::new(file);

        file.write_all(b"gen,delta_t,alive\n")?;
        for (i, (delta, alive)) in samples.iter().enumerate() {
            let line = format!("{},{},{}\n", i, delta, alive);
            file.write_all(line.as_bytes())?;
        }
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tracks_generation_count() {
        let mut stats = Recorder::new(10, false);
        stats.record(8);
        stats.record(6);

        let report = stats.report();
        assert!(report.contains("gens:2"));
        assert!(report.contains("alive:6"));
    }

    #[test]
    fn samples_only_kept_when_enabled() {
        let mut sampled = Recorder::new(4, true);
        let mut unsampled = Recorder::new(4, false);
        sampled.record(3);
        unsampled.record(3);

        assert_eq!(sampled.samples.as_ref().map(Vec::len), Some(1));
        assert!(unsampled.samples.is_none());
    }
}
