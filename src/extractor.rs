//! `DataExtractor`: given a parsed [`Variable`](crate::header::Variable)
//! and the byte image, produces its decoded values.
//!
//! Builds a fresh [`ByteCursor`] per call rather than sharing one owned by
//! the reader — cheap, and removes the concurrent-extraction hazard of a
//! single shared cursor offset.

use crate::consts::STREAMING_SIZE_SENTINEL;
use crate::cursor::ByteCursor;
use crate::errors::NetCdfError;
use crate::header::{Header, Variable};
use crate::types::{self, TypeName, Value};

fn empty_value_for(type_name: TypeName) -> Value {
    match type_name {
        TypeName::Byte => Value::Bytes(Vec::new()),
        TypeName::Char => Value::Text(String::new()),
        TypeName::Short => Value::I16Seq(Vec::new()),
        TypeName::Int => Value::I32Seq(Vec::new()),
        TypeName::Float => Value::F32Seq(Vec::new()),
        TypeName::Double => Value::F64Seq(Vec::new()),
    }
}

/// Concatenates the per-record chunks produced by the record path into
/// one value spanning all records.
fn flatten_chunks(chunks: Vec<Value>, type_name: TypeName) -> Value {
    match type_name {
        TypeName::Byte => {
            let mut out = Vec::new();
            for chunk in chunks {
                if let Value::Bytes(bytes) = chunk {
                    out.extend(bytes);
                }
            }
            Value::Bytes(out)
        }
        TypeName::Char => {
            let mut out = String::new();
            for chunk in chunks {
                if let Value::Text(text) = chunk {
                    out.push_str(&text);
                }
            }
            Value::Text(out)
        }
        TypeName::Short => {
            let mut out = Vec::new();
            for chunk in chunks {
                match chunk {
                    Value::I16Scalar(v) => out.push(v),
                    Value::I16Seq(v) => out.extend(v),
                    _ => {}
                }
            }
            if out.len() == 1 {
                Value::I16Scalar(out[0])
            } else {
                Value::I16Seq(out)
            }
        }
        TypeName::Int => {
            let mut out = Vec::new();
            for chunk in chunks {
                match chunk {
                    Value::I32Scalar(v) => out.push(v),
                    Value::I32Seq(v) => out.extend(v),
                    _ => {}
                }
            }
            if out.len() == 1 {
                Value::I32Scalar(out[0])
            } else {
                Value::I32Seq(out)
            }
        }
        TypeName::Float => {
            let mut out = Vec::new();
            for chunk in chunks {
                match chunk {
                    Value::F32Scalar(v) => out.push(v),
                    Value::F32Seq(v) => out.extend(v),
                    _ => {}
                }
            }
            if out.len() == 1 {
                Value::F32Scalar(out[0])
            } else {
                Value::F32Seq(out)
            }
        }
        TypeName::Double => {
            let mut out = Vec::new();
            for chunk in chunks {
                match chunk {
                    Value::F64Scalar(v) => out.push(v),
                    Value::F64Seq(v) => out.extend(v),
                    _ => {}
                }
            }
            if out.len() == 1 {
                Value::F64Scalar(out[0])
            } else {
                Value::F64Seq(out)
            }
        }
    }
}

fn extract_non_record(data: &[u8], variable: &Variable) -> Result<Value, NetCdfError> {
    if variable.size_bytes == STREAMING_SIZE_SENTINEL {
        return Err(NetCdfError::Truncated);
    }
    let code = types::name_to_code(variable.type_name);
    let type_size = types::size_bytes(variable.type_name);
    let element_count = variable.size_bytes / type_size;

    let mut cursor = ByteCursor::new(data);
    cursor.seek(variable.offset)?;
    types::read_one(&mut cursor, code, element_count)
}

fn extract_record(data: &[u8], header: &Header, variable: &Variable) -> Result<Value, NetCdfError> {
    if variable.size_bytes == STREAMING_SIZE_SENTINEL {
        return Err(NetCdfError::Truncated);
    }
    let record_step = header.record_dimension.record_step.ok_or_else(|| {
        NetCdfError::not_netcdf("record variable present but record_step is unset")
    })?;
    let length = header.record_dimension.length;

    let code = types::name_to_code(variable.type_name);
    let type_size = types::size_bytes(variable.type_name);
    let width = if variable.size_bytes > 0 {
        variable.size_bytes / type_size
    } else {
        1
    };

    if length == 0 {
        return Ok(empty_value_for(variable.type_name));
    }

    let mut cursor = ByteCursor::new(data);
    cursor.seek(variable.offset)?;

    let mut chunks = Vec::with_capacity(length as usize);
    for _ in 0..length {
        let current = cursor.offset();
        chunks.push(types::read_one(&mut cursor, code, width)?);
        cursor.seek(current + record_step as u64)?;
    }

    Ok(flatten_chunks(chunks, variable.type_name))
}

/// Decodes `variable`'s values out of `data`, dispatching to the
/// non-record (contiguous) or record (strided) strategy.
pub(crate) fn extract(data: &[u8], header: &Header, variable: &Variable) -> Result<Value, NetCdfError> {
    if variable.is_record {
        extract_record(data, header, variable)
    } else {
        extract_non_record(data, variable)
    }
}
