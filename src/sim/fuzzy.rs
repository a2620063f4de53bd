//! Minimal Mamdani fuzzy inference
//!
//! Triangular memberships, min implication, max aggregation and centroid
//! defuzzification over a fixed, symmetric sample grid. Built once and
//! evaluated per tick; only the crisp input changes.

/// Triangular membership function with feet at `a`, `c` and peak at `b`.
/// `a == b` or `b == c` gives a shoulder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl Triangle {
    pub const fn new(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }

    /// Membership degree in [0, 1]
    pub fn degree(&self, x: f32) -> f32 {
        if x < self.a || x > self.c {
            return 0.0;
        }
        if x == self.b {
            return 1.0;
        }
        if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else {
            (self.c - x) / (self.c - self.b)
        }
    }
}

/// "If input term `input` then output term `output`"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub input: usize,
    pub output: usize,
}

/// Single-input, single-output fuzzy system
#[derive(Debug, Clone)]
pub struct InferenceSystem {
    input_range: (f32, f32),
    inputs: Vec<Triangle>,
    outputs: Vec<Triangle>,
    rules: Vec<Rule>,
    samples: Vec<f32>,
}

impl InferenceSystem {
    /// `half_samples` grid points on each side of zero over [-out, out].
    /// Rules must index into `inputs` and `outputs`.
    pub fn new(
        input_range: (f32, f32),
        inputs: Vec<Triangle>,
        output_half_range: f32,
        outputs: Vec<Triangle>,
        rules: Vec<Rule>,
        half_samples: u32,
    ) -> Self {
        debug_assert!(
            rules
                .iter()
                .all(|r| r.input < inputs.len() && r.output < outputs.len())
        );
        let n = half_samples.max(1) as i32;
        // Integer-indexed grid so +s and -s are exact negatives
        let samples = (-n..=n)
            .map(|i| i as f32 * output_half_range / n as f32)
            .collect();
        Self {
            input_range,
            inputs,
            outputs,
            rules,
            samples,
        }
    }

    /// Crisp output for a crisp input (clamped into the input range).
    /// Returns 0 when no rule fires.
    pub fn evaluate(&self, x: f32) -> f32 {
        let x = x.clamp(self.input_range.0, self.input_range.1);
        let strengths: Vec<(f32, &Triangle)> = self
            .rules
            .iter()
            .map(|r| (self.inputs[r.input].degree(x), &self.outputs[r.output]))
            .filter(|(strength, _)| *strength > 0.0)
            .collect();

        let mut weighted = 0.0;
        let mut mass = 0.0;
        for &s in &self.samples {
            let mu = strengths
                .iter()
                .map(|(strength, term)| strength.min(term.degree(s)))
                .fold(0.0_f32, f32::max);
            weighted += s * mu;
            mass += mu;
        }

        if mass <= f32::EPSILON {
            0.0
        } else {
            weighted / mass
        }
    }
}
