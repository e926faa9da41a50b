pub mod local_file_source_impl;
pub mod remote_object_source_impl;
