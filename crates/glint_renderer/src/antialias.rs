//! Subpixel displacement table for supersampling.

/// Fixed table of subpixel displacements and weights for an S x S
/// supersampling grid.
///
/// Displacements are uniformly stratified over `[-0.5, 0.5]` in pixel units;
/// weights follow a separable Gaussian falloff and are normalized so the
/// whole table sums to 1, making the accumulated pixel color a convex
/// combination of its subsample colors. The table is a pure function of the
/// sample count and can be built once and reused for every pixel.
pub struct AntiAliasingTable {
    samples: usize,
    displacements: Vec<f32>,
    weights: Vec<f32>,
}

impl AntiAliasingTable {
    /// Build the table for an `samples x samples` grid.
    pub fn new(samples: usize) -> Self {
        assert!(samples > 0, "sample count must be positive");

        let displacements: Vec<f32> = (0..samples)
            .map(|i| (i as f32 + 0.5) / samples as f32 - 0.5)
            .collect();

        // Separable Gaussian, sigma in pixel units
        let sigma = 0.5_f32;
        let gauss: Vec<f32> = displacements
            .iter()
            .map(|d| (-d * d / (2.0 * sigma * sigma)).exp())
            .collect();

        let mut weights = Vec::with_capacity(samples * samples);
        for gy in &gauss {
            for gx in &gauss {
                weights.push(gx * gy);
            }
        }
        let total: f32 = weights.iter().sum();
        for w in &mut weights {
            *w /= total;
        }

        Self {
            samples,
            displacements,
            weights,
        }
    }

    /// Number of samples per axis.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Subpixel displacement for sample index `i`, in `[-0.5, 0.5]`.
    #[inline]
    pub fn displacement(&self, i: usize) -> f32 {
        self.displacements[i]
    }

    /// Normalized weight of the subsample at grid position `(dx, dy)`.
    #[inline]
    pub fn weight(&self, dx: usize, dy: usize) -> f32 {
        self.weights[dy * self.samples + dx]
    }
}
