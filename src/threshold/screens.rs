//! Clustered halftone screens as fixed rank tables.

use super::matrix::ThresholdMatrix;

const CLUSTERED_DOTS: [[u32; 6]; 6] = [
    [34, 29, 17, 21, 30, 35],
    [28, 14, 9, 16, 20, 31],
    [13, 8, 4, 5, 15, 19],
    [12, 3, 0, 1, 10, 18],
    [27, 7, 2, 6, 23, 24],
    [33, 26, 11, 22, 25, 32],
];

const CENTRAL_WHITE_POINT: [[u32; 6]; 6] = [
    [34, 25, 21, 17, 29, 33],
    [30, 13, 9, 5, 12, 24],
    [18, 6, 1, 0, 8, 20],
    [22, 10, 2, 3, 4, 16],
    [26, 14, 7, 11, 15, 28],
    [35, 31, 19, 23, 27, 32],
];

const BALANCED_CENTERED_POINT: [[u32; 6]; 6] = [
    [30, 22, 16, 21, 33, 35],
    [24, 11, 7, 9, 26, 28],
    [13, 1, 0, 2, 14, 18],
    [20, 8, 3, 4, 19, 23],
    [31, 10, 5, 12, 27, 32],
    [34, 25, 15, 17, 29, 6],
];

// Two interleaved diamonds; each rank appears twice.
const RHOMBUS: [[u32; 8]; 8] = [
    [13, 9, 5, 12, 18, 22, 26, 19],
    [6, 1, 0, 8, 25, 30, 31, 23],
    [10, 2, 3, 4, 21, 29, 28, 27],
    [14, 7, 11, 15, 17, 24, 20, 16],
    [18, 22, 26, 19, 13, 9, 5, 12],
    [25, 30, 31, 23, 6, 1, 0, 8],
    [21, 29, 28, 27, 10, 2, 3, 4],
    [17, 24, 20, 16, 14, 7, 11, 15],
];

impl ThresholdMatrix {
    /// 6 x 6 clustered-dot screen growing from the center.
    pub fn clustered_dots() -> Self {
        Self::from_rank_table(&CLUSTERED_DOTS)
    }

    /// 6 x 6 screen growing a white point from the center.
    pub fn central_white_point() -> Self {
        Self::from_rank_table(&CENTRAL_WHITE_POINT)
    }

    /// 6 x 6 balanced centered-point screen.
    pub fn balanced_centered_point() -> Self {
        Self::from_rank_table(&BALANCED_CENTERED_POINT)
    }

    /// 8 x 8 diamond-shaped screen.
    pub fn rhombus() -> Self {
        Self::from_rank_table(&RHOMBUS)
    }
}
