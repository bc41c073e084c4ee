use int_buffer::{BufferError, IntBuffer};

fn main() {
    println!("Initializing IntBuffer...");
    let mut buffer = IntBuffer::new();

    println!("Pushing elements...");
    for i in 0..10 {
        buffer.push(i);
    }

    assert_eq!(buffer.len(), 10);
    assert_eq!(buffer.capacity(), 16);
    println!("Buffer length verified: {} (capacity {})", buffer.len(), buffer.capacity());

    println!("Checked access:");
    for i in 0..buffer.len() {
        let val = buffer.at(i).unwrap();
        println!("Index {}: {}", i, val);
        assert_eq!(i as i32, *val);
    }
    assert_eq!(buffer.at(10), Err(BufferError::OutOfRange { index: 10, len: 10 }));

    println!("Copying and mutating the copy...");
    let mut copy = buffer.clone();
    copy[0] = -1;
    copy.resize(12);
    assert_eq!(buffer[0], 0);
    assert_eq!(&copy[10..], &[0, 0]);

    println!("Clearing...");
    buffer.clear();
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.capacity(), 16);
    assert!(buffer.at(0).is_err());
    println!("Integration test passed successfully.");
}
