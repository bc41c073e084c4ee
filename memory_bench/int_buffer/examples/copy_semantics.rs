use int_buffer::IntBuffer;

fn main() {
    println!("--- Deep Copy Example ---");
    let mut original = IntBuffer::new();
    for i in 0..3 {
        original.push(i);
    }

    let mut copy = original.clone();
    copy[0] = 100;
    copy.push(3);
    println!("original: {:?}", original);
    println!("copy:     {:?}", copy);

    // Copy-assignment: the old storage of `target` is released once
    let mut target = IntBuffer::with_size(16);
    target.clone_from(&original);
    println!("target after clone_from: {:?}", target);

    assert_eq!(original.as_slice(), &[0, 1, 2]);
    assert_eq!(target, original);
}
