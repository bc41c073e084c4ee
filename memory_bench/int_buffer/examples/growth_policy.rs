use int_buffer::IntBuffer;

fn report(label: &str, buf: &IntBuffer) {
    println!("{:<24} len = {:>2}, cap = {:>2}, data = {:?}", label, buf.len(), buf.capacity(), buf.as_slice());
}

fn main() {
    println!("--- Doubling on push ---");
    let mut pushed = IntBuffer::new();
    let mut last_cap = pushed.capacity();
    for i in 0..9 {
        pushed.push(i);
        if pushed.capacity() != last_cap {
            println!("push({}) grew capacity {} -> {}", i, last_cap, pushed.capacity());
            last_cap = pushed.capacity();
        }
    }

    println!("\n--- Exact growth on reserve / resize ---");
    let mut exact = IntBuffer::with_size(3);
    report("with_size(3)", &exact);
    exact.reserve(5);
    report("reserve(5)", &exact);
    exact.reserve(2);
    report("reserve(2) is a no-op", &exact);
    exact.resize(7);
    report("resize(7)", &exact);

    println!("\n--- Shrinking keeps the storage ---");
    exact[0] = 11;
    exact.resize(2);
    report("resize(2)", &exact);
    exact.clear();
    report("clear()", &exact);
    exact.resize(4);
    report("resize(4) re-zeroes", &exact);
}
