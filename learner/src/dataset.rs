//! The training-data log and its comma-separated exchange format.

use std::fmt::Write as _;

/// Header row of the exchange format. Import skips the first row by
/// position, so this exact text is only a courtesy for human readers.
pub const CSV_HEADER: &str = "ballX,ballY,ballXVel,ballYVel,playerY";

/// One labeled training example: normalized ball kinematics paired with
/// the human paddle's position at that instant. All fields lie in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_x_vel: f32,
    pub ball_y_vel: f32,
    pub player_y: f32,
}

/// Counts reported back from an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Owned, append-only sequence of samples. One log is created per session
/// and is only ever replaced wholesale, on import of an external log.
#[derive(Debug, Clone, Default)]
pub struct SampleLog {
    samples: Vec<Sample>,
}

impl SampleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Serialize the log to the exchange format, header row first
    pub fn to_csv(&self) -> String {
        let mut out = String::with_capacity((self.samples.len() + 1) * 48);
        out.push_str(CSV_HEADER);
        out.push('\n');
        for s in &self.samples {
            let _ = writeln!(
                out,
                "{},{},{},{},{}",
                s.ball_x, s.ball_y, s.ball_x_vel, s.ball_y_vel, s.player_y
            );
        }
        out
    }

    /// Parse an exported log. The first row is skipped by position; rows
    /// with the wrong column count or non-numeric fields are dropped and
    /// counted. Legacy three-column logs fail the column-count check, so
    /// only the current five-column schema loads.
    pub fn from_csv(text: &str) -> (Self, ImportReport) {
        let mut log = SampleLog::new();
        let mut skipped = 0;

        for line in text.lines().skip(1) {
            match parse_row(line) {
                Some(sample) => log.push(sample),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            log::warn!("training-data import dropped {skipped} malformed rows");
        }
        let report = ImportReport {
            loaded: log.len(),
            skipped,
        };
        (log, report)
    }
}

fn parse_row(line: &str) -> Option<Sample> {
    let mut values = [0.0f32; 5];
    let mut count = 0;
    for field in line.split(',') {
        if count == values.len() {
            return None;
        }
        values[count] = field.trim().parse().ok()?;
        count += 1;
    }
    if count != values.len() {
        return None;
    }
    Some(Sample {
        ball_x: values[0],
        ball_y: values[1],
        ball_x_vel: values[2],
        ball_y_vel: values[3],
        player_y: values[4],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(v: f32) -> Sample {
        Sample {
            ball_x: v,
            ball_y: v,
            ball_x_vel: v,
            ball_y_vel: v,
            player_y: v,
        }
    }

    #[test]
    fn test_csv_round_trip() {
        let mut log = SampleLog::new();
        log.push(sample(0.25));
        log.push(sample(0.5));
        log.push(Sample {
            ball_x: 0.1,
            ball_y: 0.9,
            ball_x_vel: 0.55,
            ball_y_vel: 0.45,
            player_y: 0.5,
        });

        let text = log.to_csv();
        assert!(text.starts_with(CSV_HEADER));

        let (parsed, report) = SampleLog::from_csv(&text);
        assert_eq!(report, ImportReport { loaded: 3, skipped: 0 });
        assert_eq!(parsed.samples(), log.samples());
    }

    #[test]
    fn test_import_skips_header_by_position() {
        // First row is data-shaped but must still be skipped
        let text = "0.1,0.2,0.3,0.4,0.5\n0.6,0.6,0.6,0.6,0.6\n";
        let (log, report) = SampleLog::from_csv(text);
        assert_eq!(report, ImportReport { loaded: 1, skipped: 0 });
        assert_eq!(log.samples()[0], sample(0.6));
    }

    #[test]
    fn test_import_drops_malformed_rows() {
        let text = concat!(
            "ballX,ballY,ballXVel,ballYVel,playerY\n",
            "0.1,0.2,0.3,0.4,0.5\n",
            "0.1,0.2,0.5\n",          // legacy 3-column row
            "0.1,0.2,abc,0.4,0.5\n",  // non-numeric field
            "0.1,0.2,0.3,0.4,0.5,0.6\n", // too many columns
            "\n",
            "0.9,0.9,0.9,0.9,0.9\n",
        );
        let (log, report) = SampleLog::from_csv(text);
        assert_eq!(report, ImportReport { loaded: 2, skipped: 4 });
        assert_eq!(log.len(), 2);
        assert_eq!(log.samples()[1], sample(0.9));
    }

    #[test]
    fn test_import_of_empty_text() {
        let (log, report) = SampleLog::from_csv("");
        assert!(log.is_empty());
        assert_eq!(report, ImportReport { loaded: 0, skipped: 0 });
    }
}
