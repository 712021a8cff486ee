//! SEG-Y file header formats.
//!
//! This module contains the table-driven binary header codec, the EBCDIC
//! textual header decoder, and whole-file container I/O. Trace headers and
//! trace samples are not interpreted.
//!
//! Start with [`file::SegyFile`] to open a file, then decode its headers with
//! [`file::SegyFile::textual_header`] and [`file::SegyFile::binary_header`].

pub mod binary_header;
pub mod constants;
pub mod ebcdic;
pub mod file;
pub mod schema;
pub mod textual_header;
