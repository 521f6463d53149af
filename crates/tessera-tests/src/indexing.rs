//! Coordinate access tests
