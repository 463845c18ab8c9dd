pub mod frame_sequence;
