use super::*;
use crossbeam::scope;
use rand::Rng;
use std::thread;


#[test]
fn test_new_is_empty() {
    let v = IntBuffer::new();
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 0);
    assert!(v.is_empty());
    assert_eq!(v.as_slice(), &[] as &[i32]);
}

#[test]
fn test_push_keeps_order() {
    let mut v = IntBuffer::new();
    v.push(42);
    v.push(7);
    assert_eq!(v.len(), 2);
    assert_eq!(v.at(0), Ok(&42));
    assert_eq!(v.at(1), Ok(&7));

    v.push(10);
    v.push(20);
    v.push(30);
    assert_eq!(v.as_slice(), &[42, 7, 10, 20, 30]);
    assert_eq!(v[3], 20);
}

#[test]
fn test_with_size_zero_filled() {
    let mut v = IntBuffer::with_size(5);
    assert_eq!(v.len(), 5);
    assert_eq!(v.capacity(), 5);
    assert!(v.iter().all(|&x| x == 0));

    v[2] = 99;
    assert_eq!(v.as_slice(), &[0, 0, 99, 0, 0]);

    v.push(123);
    assert_eq!(v.len(), 6);
    assert_eq!(v.capacity(), 10);
    assert_eq!(v[v.len() - 1], 123);
    assert_eq!(v.last(), Some(&123));

    v.clear();
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 10);
}

#[test]
fn test_with_size_zero_allocates_nothing() {
    let v = IntBuffer::with_size(0);
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 0);
}

#[test]
fn test_doubling_growth() {
    let mut v = IntBuffer::new();
    let mut seen = Vec::new();
    for i in 0..9 {
        v.push(i);
        if seen.last() != Some(&v.capacity()) {
            seen.push(v.capacity());
        }
    }
    assert_eq!(seen, vec![1, 2, 4, 8, 16]);
}

#[test]
fn test_growth_is_logarithmic() {
    for n in [1usize, 2, 3, 4, 5, 100, 1000, 1024, 1025] {
        let mut v = IntBuffer::new();
        let mut regrowths = 0;
        let mut cap = v.capacity();
        for i in 0..n {
            v.push(i as i32);
            if v.capacity() != cap {
                regrowths += 1;
                cap = v.capacity();
            }
        }
        let expected = (usize::BITS - (n - 1).leading_zeros()) as usize + 1;
        assert_eq!(regrowths, expected, "n = {}", n);
        assert!(v.capacity() >= n && v.capacity() < 2 * n.max(1));
    }
}

#[test]
fn test_at_out_of_range() {
    let mut v = IntBuffer::new();
    assert_eq!(v.at(0), Err(BufferError::OutOfRange { index: 0, len: 0 }));

    v.push(1);
    assert_eq!(v.at(0), Ok(&1));
    assert_eq!(v.at(100), Err(BufferError::OutOfRange { index: 100, len: 1 }));
}

#[test]
fn test_at_mut_out_of_range() {
    let mut v = IntBuffer::with_size(3);
    *v.at_mut(1).unwrap() = 8;
    assert_eq!(v.as_slice(), &[0, 8, 0]);
    assert!(matches!(v.at_mut(3), Err(BufferError::OutOfRange { index: 3, len: 3 })));
}

#[test]
fn test_at_after_clear() {
    let mut v = IntBuffer::from(&[1, 2, 3][..]);
    v.clear();
    // 旧值仍在存储中，但逻辑上已不可访问
    assert!(v.at(0).is_err());
    assert!(v.at(2).is_err());
}

#[test]
fn test_out_of_range_message() {
    let err = IntBuffer::new().at(4).unwrap_err();
    assert_eq!(err.to_string(), "index 4 out of range for buffer of length 0");
}

#[test]
fn test_unchecked_access() {
    let mut v = IntBuffer::from(&[5, 6, 7][..]);
    unsafe {
        assert_eq!(*v.get_unchecked(1), 6);
        *v.get_unchecked_mut(2) = 70;
    }
    assert_eq!(v.as_slice(), &[5, 6, 70]);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_index_past_len_panics() {
    let mut v = IntBuffer::new();
    v.reserve(8);
    let value = v[0];
    assert_eq!(value, 0);
}

#[test]
fn test_resize_zero_fills() {
    let mut v = IntBuffer::new();
    v.push(5);
    v.resize(5);
    assert_eq!(v.len(), 5);
    assert_eq!(v.capacity(), 5);
    assert_eq!(v.as_slice(), &[5, 0, 0, 0, 0]);
}

#[test]
fn test_resize_shrink_keeps_capacity() {
    let mut v = IntBuffer::from(&[1, 2, 3, 4][..]);
    let cap = v.capacity();
    v.resize(2);
    assert_eq!(v.as_slice(), &[1, 2]);
    assert_eq!(v.capacity(), cap);
}

#[test]
fn test_resize_after_shrink_rezeroes() {
    let mut v = IntBuffer::from(&[1, 2, 3, 4][..]);
    v.resize(1);
    v.resize(4);
    assert_eq!(v.as_slice(), &[1, 0, 0, 0]);

    v.clear();
    v.resize(2);
    assert_eq!(v.as_slice(), &[0, 0]);
}

#[test]
fn test_reserve_exact_and_never_shrinks() {
    let mut v = IntBuffer::new();
    v.push(1);
    v.push(2);
    v.reserve(10);
    assert_eq!(v.capacity(), 10);
    assert_eq!(v.as_slice(), &[1, 2]);

    v.reserve(3);
    assert_eq!(v.capacity(), 10);
    assert_eq!(v.len(), 2);
}

#[test]
fn test_push_after_clear_reuses_storage() {
    let mut v = IntBuffer::from(&[1, 2, 3][..]);
    assert_eq!(v.capacity(), 4);
    v.clear();
    for i in 0..4 {
        v.push(i);
    }
    assert_eq!(v.capacity(), 4);
    v.push(4);
    assert_eq!(v.capacity(), 8);
    assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4]);
}

#[test]
fn test_clone_is_deep() {
    let mut original = IntBuffer::new();
    original.push(1);
    original.push(2);
    original.push(3);

    let mut copy = original.clone();
    assert_eq!(copy, original);
    assert_eq!(copy.capacity(), original.capacity());

    copy[0] = 100;
    copy.push(4);
    copy.resize(10);
    assert_eq!(original.as_slice(), &[1, 2, 3]);
    assert_eq!(original.len(), 3);
}

#[test]
fn test_clone_of_empty() {
    let original = IntBuffer::new();
    let copy = original.clone();
    assert_eq!(copy.len(), 0);
    assert_eq!(copy.capacity(), 0);
}

#[test]
fn test_clone_from_replaces_contents() {
    let source = IntBuffer::from(&[9, 8, 7][..]);
    let mut target = IntBuffer::with_size(20);
    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.capacity(), source.capacity());

    target.push(6);
    *target.at_mut(0).unwrap() = 0;
    assert_eq!(source.as_slice(), &[9, 8, 7]);
}

#[test]
fn test_assignment_replaces_contents() {
    let mut a = IntBuffer::with_size(4);
    let b = IntBuffer::from(&[1, 2][..]);
    a = b.clone();
    assert_eq!(a.as_slice(), &[1, 2]);
    assert_eq!(b.as_slice(), &[1, 2]);
}

#[test]
fn test_equality_ignores_capacity() {
    let mut a = IntBuffer::from(&[1, 2][..]);
    let b = IntBuffer::from(&[1, 2][..]);
    a.reserve(64);
    assert_eq!(a, b);
    a.push(3);
    assert_ne!(a, b);
}

#[test]
fn test_debug_format() {
    let v = IntBuffer::from(&[1, 2, 3][..]);
    assert_eq!(format!("{:?}", v), "IntBuffer { len: 3, capacity: 4, data: [1, 2, 3] }");
}

#[test]
fn test_random_sequences_match_std_vec() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let mut ours = IntBuffer::new();
        let mut reference: Vec<i32> = Vec::new();
        for _ in 0..rng.random_range(0..200) {
            match rng.random_range(0..10) {
                0 => {
                    ours.clear();
                    reference.clear();
                }
                1 => {
                    let n = rng.random_range(0..64);
                    ours.resize(n);
                    reference.resize(n, 0);
                }
                2 => {
                    let n = rng.random_range(0..64);
                    ours.reserve(n);
                    assert!(ours.capacity() >= n);
                }
                _ => {
                    let x = rng.random::<i32>();
                    ours.push(x);
                    reference.push(x);
                }
            }
            assert_eq!(ours.as_slice(), reference.as_slice());
            assert!(ours.len() <= ours.capacity());
        }
    }
}

#[test]
fn test_move_across_threads() {
    let mut v = IntBuffer::new();
    for i in 0..10 {
        v.push(i);
    }

    let handle = thread::spawn(move || {
        v.push(100);
        v
    });
    let v = handle.join().unwrap();
    assert_eq!(v.len(), 11);
    assert_eq!(v.last(), Some(&100));
}

#[test]
fn test_concurrent_reads() {
    let mut v = IntBuffer::new();
    for i in 0..100 {
        v.push(i);
    }

    scope(|s| {
        let a = s.spawn(|_| v.iter().sum::<i32>());
        let b = s.spawn(|_| v.at(99).copied());
        assert_eq!(a.join().unwrap(), 4950);
        assert_eq!(b.join().unwrap(), Ok(99));
    })
    .unwrap();
}

#[test]
fn test_independent_instances_in_parallel() {
    let mut a = IntBuffer::new();
    let mut b = IntBuffer::new();

    scope(|s| {
        s.spawn(|_| {
            for i in 0..1000 {
                a.push(i);
            }
        });
        s.spawn(|_| {
            b.resize(500);
        });
    })
    .unwrap();

    assert_eq!(a.len(), 1000);
    assert_eq!(b.len(), 500);
}
