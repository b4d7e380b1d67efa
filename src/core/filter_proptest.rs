//! Property-based tests for the filter logic
//!
//! These verify the filter contract over arbitrary catalogs and criteria:
//! membership is exactly the conjunction of the four clauses, order is
//! preserved, and raw-input handling never errors.
