use serde::{Deserialize, Serialize};

/// Per-face roll histogram. Index i holds the count for face i + 1.
#[derive(Serialize, Deserialize, PartialEq, Copy, Clone, Debug, Default)]
pub struct FaceCounts([u64; 6]);

impl FaceCounts {
    pub fn add(&mut self, face: u8) {
        assert!(face >= 1);
        assert!(face <= 6);
        self.0[face as usize - 1] += 1;
    }

    pub fn count(&self, face: u8) -> u64 {
        assert!(face >= 1);
        assert!(face <= 6);
        self.0[face as usize - 1]
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Point value of all counted rolls: sum of face times count.
    pub fn points(&self) -> u64 {
        self.0
            .iter()
            .enumerate()
            .map(|(i, c)| (i as u64 + 1) * c)
            .sum()
    }

    /// The face with the highest count. Ties go to the lowest face.
    pub fn most_common(&self) -> u8 {
        let mut best = 0;
        for (i, c) in self.0.iter().enumerate() {
            if *c > self.0[best] {
                best = i;
            }
        }
        best as u8 + 1
    }
}
