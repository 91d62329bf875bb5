use crate::error::ConnError;
use std::fs::File;
use std::io::BufReader;

pub fn get_buf_reader(file_path: &str) -> Result<BufReader<File>, ConnError> {
    Ok(BufReader::new(
        File::open(file_path)
            .map_err(|e| ConnError::ReadFile(file_path.to_owned(), e.to_string()))?,
    ))
}
