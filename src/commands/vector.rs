use super::write_title;
use anyhow::Result;
use int_buffer::IntBuffer;
use std::io::Write;
use tracing::info;

/// Walks through every buffer operation and prints what it observes.
pub fn run(out: &mut impl Write) -> Result<()> {
    write_title(out, "Growable Integer Buffer")?;

    {
        let mut vec = IntBuffer::new();
        vec.push(42);
        vec.push(7);
        writeln!(out, "vec.size() = {}", vec.len())?;
        writeln!(out, "vec.at(0) = {}", vec.at(0)?)?;
    } // storage of `vec` is released here

    let mut vec2 = IntBuffer::with_size(5);
    vec2[2] = 99;
    writeln!(out, "vec2.size() = {}, vec2[2] = {}", vec2.len(), vec2[2])?;

    vec2.push(123);
    writeln!(
        out,
        "After push_back vec2.size() = {}, back = {}",
        vec2.len(),
        vec2[vec2.len() - 1]
    )?;
    writeln!(out, "vec2.capacity() = {}", vec2.capacity())?;

    vec2.clear();
    writeln!(
        out,
        "After clear, vec2.size() = {}, vec2.capacity() = {}",
        vec2.len(),
        vec2.capacity()
    )?;

    match vec2.at(0) {
        Ok(value) => writeln!(out, "vec2.at(0) = {}", value)?,
        Err(e) => writeln!(out, "vec2.at(0) failed: {}", e)?,
    }

    vec2.push(5);
    vec2.resize(4);
    writeln!(out, "After push_back(5) and resize(4), vec2 = {:?}", vec2.as_slice())?;

    vec2.reserve(32);
    writeln!(
        out,
        "After reserve(32), vec2.size() = {}, vec2.capacity() = {}",
        vec2.len(),
        vec2.capacity()
    )?;

    let mut vec3 = vec2.clone();
    *vec3.at_mut(1)? = 7;
    writeln!(out, "vec3 = copy of vec2, vec3[1] = {}, vec2[1] = {}", vec3[1], vec2[1])?;

    let mut vec4 = IntBuffer::with_size(2);
    vec4.clone_from(&vec3);
    writeln!(
        out,
        "vec4 assigned from vec3: {:?}, capacity = {}",
        vec4.as_slice(),
        vec4.capacity()
    )?;

    info!(len = vec4.len(), "vector exercise finished");
    writeln!(out, "\nVector exercise completed.")?;
    Ok(())
}
