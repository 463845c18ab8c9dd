pub mod linear_ramp;
