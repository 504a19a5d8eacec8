/*!
# IO utilities

Corpus loading. Output is written by the binary, encoders only build strings.
!*/
pub mod reader;
