//! Split the ordered frame list into per-file batches.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// A contiguous run of frames assigned to one output sheet.
#[derive(Debug, Clone, Copy)]
pub struct SheetBatch<'a> {
    /// Position of this batch, used to name the output when splitting.
    pub index: usize,
    pub frames: &'a [PathBuf],
}

/// Partition `frames` into `files` batches of `ceil(N / files)` frames each;
/// the last batch may be smaller. A `per_file` below 1 (zero files, or an
/// empty frame list) would loop forever downstream, so it is rejected.
pub fn partition(frames: &[PathBuf], files: u32) -> Result<Vec<SheetBatch<'_>>> {
    if files == 0 || frames.is_empty() {
        return Err(Error::InvalidPartition {
            frames: frames.len(),
            files,
        });
    }
    let per_file = frames.len().div_ceil(files as usize);
    Ok(frames
        .chunks(per_file)
        .enumerate()
        .map(|(index, frames)| SheetBatch { index, frames })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_frames(n: usize) -> Vec<PathBuf> {
        (0..n)
            .map(|i| PathBuf::from(format!("frame{i:04}.png")))
            .collect()
    }

    #[test]
    fn seventeen_frames_over_three_files() {
        let frames = fake_frames(17);
        let batches = partition(&frames, 3).unwrap();
        let sizes: Vec<_> = batches.iter().map(|b| b.frames.len()).collect();
        assert_eq!(sizes, vec![6, 6, 5]);
    }

    #[test]
    fn batches_reconstruct_the_input_in_order() {
        let frames = fake_frames(23);
        let batches = partition(&frames, 4).unwrap();
        let rebuilt: Vec<_> = batches
            .iter()
            .flat_map(|b| b.frames.iter().cloned())
            .collect();
        assert_eq!(rebuilt, frames);
        assert_eq!(batches.len(), 23usize.div_ceil(4));
    }

    #[test]
    fn single_file_keeps_everything_together() {
        let frames = fake_frames(8);
        let batches = partition(&frames, 1).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].index, 0);
        assert_eq!(batches[0].frames.len(), 8);
    }

    #[test]
    fn more_files_than_frames_never_yields_empty_batches() {
        let frames = fake_frames(3);
        let batches = partition(&frames, 5).unwrap();
        assert!(batches.iter().all(|b| !b.frames.is_empty()));
        assert_eq!(batches.len(), 3);
    }

    #[test]
    fn zero_files_is_invalid() {
        let frames = fake_frames(4);
        assert!(matches!(
            partition(&frames, 0),
            Err(Error::InvalidPartition { frames: 4, files: 0 })
        ));
    }

    #[test]
    fn empty_frame_list_is_invalid() {
        assert!(matches!(
            partition(&[], 2),
            Err(Error::InvalidPartition { frames: 0, .. })
        ));
    }
}
