pub(crate) mod common;
pub(crate) mod partition;
pub(crate) mod pivot;
pub(crate) mod quickselect;
pub(crate) mod quicksort;
