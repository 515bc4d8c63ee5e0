// Left to right scan, works on any order.
pub mod linear;

// Position estimate by linear interpolation, requires ascending input.
pub mod interpolation;
