use int_buffer::{BufferError, IntBuffer};

fn main() {
    println!("--- Checked vs direct access ---");
    let mut buf = IntBuffer::with_size(3);
    buf[1] = 20;

    for index in [0, 1, 2, 3, 100] {
        match buf.at(index) {
            Ok(value) => println!("at({}) = {}", index, value),
            Err(BufferError::OutOfRange { index, len }) => {
                println!("at({}) rejected, len is {}", index, len)
            }
        }
    }

    if let Ok(slot) = buf.at_mut(2) {
        *slot = 30;
    }
    if let Err(e) = buf.at_mut(3) {
        println!("at_mut(3): {}", e);
    }

    // Capacity beyond len is still not addressable through `at`
    buf.reserve(16);
    println!("after reserve(16): cap = {}, at(3) = {:?}", buf.capacity(), buf.at(3));

    // SAFETY: index 1 < len
    let second = unsafe { *buf.get_unchecked(1) };
    println!("get_unchecked(1) = {}", second);
    println!("contents: {:?}", buf.as_slice());
}
