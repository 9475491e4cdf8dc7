/// Index of the depot point. Tour construction starts here and the splitter
/// guarantees it lands in the first salesman's route.
pub(crate) const DEPOT: usize = 0;

/// Minimum point count for a two-salesman split to be well defined.
pub(crate) const MIN_SPLIT_POINTS: usize = 2;
