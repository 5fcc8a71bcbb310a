/*!
# Mask Comparison

Quality measures for binary foreground masks, e.g. the [`GridNetwork::mask`] of a minimum cut
against a hand-labelled reference.
*/

use super::*;

/// Agreement between a reference mask and an output mask of the same size.
///
/// All accuracies are fractions of the total number of pixels.
///
/// ```
/// use preflow::algo::MaskComparison;
///
/// let reference = [true, true, false, false];
/// let output = [true, false, false, false];
///
/// let cmp = MaskComparison::new(&reference, &output).unwrap();
/// assert_eq!(cmp.object_accuracy(), 0.25);
/// assert_eq!(cmp.background_accuracy(), 0.5);
/// assert_eq!(cmp.overall_accuracy(), 0.75);
/// assert_eq!(cmp.intersection_over_union(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaskComparison {
    pixels: usize,
    both_object: usize,
    both_background: usize,
    either_object: usize,
}

impl MaskComparison {
    /// Compares two masks. Returns `None` if their sizes differ.
    pub fn new(reference: &[bool], output: &[bool]) -> Option<Self> {
        if reference.len() != output.len() {
            return None;
        }

        let mut cmp = Self {
            pixels: reference.len(),
            ..Default::default()
        };

        for (&r, &o) in reference.iter().zip(output) {
            cmp.both_object += (r && o) as usize;
            cmp.both_background += (!r && !o) as usize;
            cmp.either_object += (r || o) as usize;
        }

        Some(cmp)
    }

    /// Fraction of pixels that are foreground in both masks
    pub fn object_accuracy(&self) -> f64 {
        self.fraction(self.both_object)
    }

    /// Fraction of pixels that are background in both masks
    pub fn background_accuracy(&self) -> f64 {
        self.fraction(self.both_background)
    }

    /// Fraction of pixels on which both masks agree
    pub fn overall_accuracy(&self) -> f64 {
        self.fraction(self.both_object + self.both_background)
    }

    /// Size of the foreground intersection divided by the size of the foreground union.
    /// Two masks without any foreground are considered identical.
    pub fn intersection_over_union(&self) -> f64 {
        if self.either_object == 0 {
            return 1.0;
        }

        self.both_object as f64 / self.either_object as f64
    }

    fn fraction(&self, count: usize) -> f64 {
        if self.pixels == 0 {
            return 1.0;
        }

        count as f64 / self.pixels as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_masks() {
        let mask = [true, false, true, true, false];
        let cmp = MaskComparison::new(&mask, &mask).unwrap();

        assert_eq!(cmp.object_accuracy(), 0.6);
        assert_eq!(cmp.background_accuracy(), 0.4);
        assert_eq!(cmp.overall_accuracy(), 1.0);
        assert_eq!(cmp.intersection_over_union(), 1.0);
    }

    #[test]
    fn disjoint_masks() {
        let cmp = MaskComparison::new(&[true, false], &[false, true]).unwrap();
        assert_eq!(cmp.overall_accuracy(), 0.0);
        assert_eq!(cmp.intersection_over_union(), 0.0);
    }

    #[test]
    fn empty_foreground() {
        let cmp = MaskComparison::new(&[false; 3], &[false; 3]).unwrap();
        assert_eq!(cmp.object_accuracy(), 0.0);
        assert_eq!(cmp.background_accuracy(), 1.0);
        assert_eq!(cmp.intersection_over_union(), 1.0);
    }

    #[test]
    fn size_mismatch() {
        assert!(MaskComparison::new(&[true], &[true, false]).is_none());
    }

    #[test]
    fn segmentation_of_a_grid() {
        // left column is foreground: strong source arcs, weak sink arcs
        let grid = GridNetwork::new(2, 2).unwrap();
        let edges = grid.edges(
            |_, _| 1u32,
            |u| if grid.pixel_of(u).map(|(x, _)| x) == Some(0) { 10 } else { 0 },
            |u| if grid.pixel_of(u).map(|(x, _)| x) == Some(1) { 10 } else { 0 },
        );

        let mut solver = PushRelabel::<u32>::new(grid.number_of_nodes(), edges).unwrap();
        let output = grid.mask(solver.min_cut());
        assert_eq!(output, vec![true, false, true, false]);

        let reference = [true, false, true, true];
        let cmp = MaskComparison::new(&reference, &output).unwrap();
        assert_eq!(cmp.overall_accuracy(), 0.75);
        assert_eq!(cmp.intersection_over_union(), 2.0 / 3.0);
    }
}
