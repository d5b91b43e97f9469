/// Default number of bins for value/quantity distributions.
pub const DEFAULT_BINS: usize = 10;

/// One histogram bin over `[lo, hi)`; the final bin of a series also
/// includes its upper edge so the sample maximum is never dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct HistBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Partition `[min, max]` into `bins` equal-width intervals and count
/// sample membership. Every sample lands in exactly one bin: the index
/// is `floor((v - min) / range * bins)` clamped to the last bin, which
/// makes the last bin inclusive of `max`. When all samples are equal
/// the result degenerates to a single bin holding everything.
pub fn histogram(samples: &[f64], bins: usize) -> Vec<HistBin> {
    if samples.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range == 0.0 {
        return vec![HistBin {
            lo: min,
            hi: max,
            count: samples.len(),
        }];
    }

    let mut out: Vec<HistBin> = (0..bins)
        .map(|i| HistBin {
            lo: min + range * i as f64 / bins as f64,
            hi: min + range * (i + 1) as f64 / bins as f64,
            count: 0,
        })
        .collect();

    for &v in samples {
        let index = (((v - min) / range) * bins as f64) as usize;
        out[index.min(bins - 1)].count += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sample_is_counted_once() {
        let samples = vec![0.0, 1.0, 2.5, 3.3, 5.0, 7.75, 9.0, 10.0];
        for bins in [1, 2, 5, 10] {
            let hist = histogram(&samples, bins);
            assert_eq!(hist.len(), bins);
            let total: usize = hist.iter().map(|b| b.count).sum();
            assert_eq!(total, samples.len(), "bins={}", bins);
        }
    }

    #[test]
    fn test_maximum_falls_in_last_bin() {
        let samples = vec![0.0, 5.0, 10.0];
        let hist = histogram(&samples, DEFAULT_BINS);
        assert_eq!(hist.last().unwrap().count, 1);
        assert_eq!(hist.last().unwrap().hi, 10.0);
    }

    #[test]
    fn test_equal_samples_degenerate_to_one_bin() {
        let samples = vec![4.2; 7];
        let hist = histogram(&samples, DEFAULT_BINS);
        assert_eq!(hist.len(), 1);
        assert_eq!(hist[0].count, 7);
        assert_eq!(hist[0].lo, 4.2);
        assert_eq!(hist[0].hi, 4.2);
    }

    #[test]
    fn test_empty_input_and_zero_bins() {
        assert!(histogram(&[], DEFAULT_BINS).is_empty());
        assert!(histogram(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn test_bin_edges_partition_the_range() {
        let samples = vec![2.0, 4.0, 6.0, 8.0];
        let hist = histogram(&samples, 3);
        assert_eq!(hist[0].lo, 2.0);
        assert_eq!(hist.last().unwrap().hi, 8.0);
        for pair in hist.windows(2) {
            assert_eq!(pair[0].hi, pair[1].lo);
        }
    }
}
