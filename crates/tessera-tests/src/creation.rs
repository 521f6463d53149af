//! Creation tests
//!
//! Construction validates the shape before allocating and initializes every
//! element.
