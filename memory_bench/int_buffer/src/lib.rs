use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use thiserror::Error;
use tracing::trace;

/// 带边界检查的访问失败时返回的错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("index {index} out of range for buffer of length {len}")]
    OutOfRange { index: usize, len: usize },
}

/// 手动管理内存的可增长整数缓冲区
///
/// `len` 个元素是有效的，`cap` 个槽位已分配。`cap == 0` 时不持有任何分配，
/// 指针为 dangling。追加时容量按 0 -> 1 -> 2 -> 4 ... 翻倍增长，
/// `reserve` / `resize` 则精确增长到请求的容量。
pub struct IntBuffer {
    ptr: NonNull<i32>,
    cap: usize,
    len: usize,
}

// SAFETY: IntBuffer 独占其存储，且元素是 i32，没有任何共享的内部状态
unsafe impl Send for IntBuffer {}
// SAFETY: 所有修改都需要 &mut self，&IntBuffer 只能读
unsafe impl Sync for IntBuffer {}

impl IntBuffer {
    /// 创建一个空缓冲区，不分配内存
    pub fn new() -> Self {
        trace!("constructing empty buffer");
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
        }
    }

    /// 创建包含 `size` 个 0 的缓冲区，`len == capacity == size`
    pub fn with_size(size: usize) -> Self {
        trace!(size, "constructing zero-filled buffer");
        Self {
            ptr: allocate_zeroed(size),
            cap: size,
            len: size,
        }
    }

    /// 获取当前元素数量
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 获取当前容量
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// 在末尾添加元素，容量不足时先翻倍
    pub fn push(&mut self, value: i32) {
        if self.len == self.cap {
            self.grow();
        }

        unsafe {
            // SAFETY: grow 之后 len < cap，该槽位在分配范围内
            ptr::write(self.ptr.as_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// 带边界检查的只读访问
    pub fn at(&self, index: usize) -> Result<&i32, BufferError> {
        self.check_index(index)?;
        // SAFETY: index < len <= cap
        Ok(unsafe { &*self.ptr.as_ptr().add(index) })
    }

    /// 带边界检查的可写访问
    pub fn at_mut(&mut self, index: usize) -> Result<&mut i32, BufferError> {
        self.check_index(index)?;
        // SAFETY: index < len <= cap，且 &mut self 保证独占
        Ok(unsafe { &mut *self.ptr.as_ptr().add(index) })
    }

    /// 不做任何检查的直接访问
    ///
    /// # Safety
    ///
    /// 调用者必须保证 `index < self.len()`。
    pub unsafe fn get_unchecked(&self, index: usize) -> &i32 {
        debug_assert!(index < self.len);
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// 不做任何检查的直接可写访问
    ///
    /// # Safety
    ///
    /// 调用者必须保证 `index < self.len()`。
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut i32 {
        debug_assert!(index < self.len);
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }

    /// 保证容量至少为 `new_cap`，需要时精确增长到 `new_cap`
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap > self.cap {
            self.reallocate(new_cap);
        }
    }

    /// 将逻辑长度设为 `new_len`
    ///
    /// 增长时新暴露的槽位一律写 0（即使之前被 clear 过的旧值仍在原处）；
    /// 缩短时只截断长度，容量不变。
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.cap {
            self.reserve(new_len);
        }
        if new_len > self.len {
            unsafe {
                // SAFETY: new_len <= cap，[len, new_len) 在分配范围内
                ptr::write_bytes(self.ptr.as_ptr().add(self.len), 0, new_len - self.len);
            }
        }
        self.len = new_len;
    }

    /// 长度归零，保留容量和存储
    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn as_slice(&self) -> &[i32] {
        // SAFETY: 前 len 个槽位已初始化；len == 0 时 dangling 指针也是对齐且非空的
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        // SAFETY: 同 as_slice，&mut self 保证独占
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    fn check_index(&self, index: usize) -> Result<(), BufferError> {
        if index >= self.len {
            return Err(BufferError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    fn grow(&mut self) {
        let new_cap = if self.cap == 0 {
            1
        } else {
            self.cap.checked_mul(2).unwrap_or_else(|| capacity_overflow())
        };
        self.reallocate(new_cap);
    }

    // 顺序固定：先分配新块，再拷贝，最后释放旧块。
    // 分配失败时旧数据原封不动。
    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        let new_ptr = allocate_zeroed(new_cap);

        unsafe {
            // SAFETY: 两块内存互不重叠，且都至少容纳 len 个元素
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            release(self.ptr, self.cap);
        }

        trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            len = self.len,
            "reallocated storage"
        );
        self.ptr = new_ptr;
        self.cap = new_cap;
    }
}

fn array_layout(cap: usize) -> Layout {
    Layout::array::<i32>(cap).unwrap_or_else(|_| capacity_overflow())
}

fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

fn allocate_zeroed(cap: usize) -> NonNull<i32> {
    if cap == 0 {
        return NonNull::dangling();
    }

    let layout = array_layout(cap);
    // SAFETY: cap > 0，layout 大小非零
    let raw = unsafe { alloc_zeroed(layout) };
    match NonNull::new(raw as *mut i32) {
        Some(p) => p,
        None => handle_alloc_error(layout),
    }
}

/// # Safety
///
/// `ptr` 必须来自 `allocate_zeroed(cap)`，且之后不再使用。
unsafe fn release(ptr: NonNull<i32>, cap: usize) {
    if cap != 0 {
        unsafe { dealloc(ptr.as_ptr() as *mut u8, array_layout(cap)) };
    }
}

impl Clone for IntBuffer {
    /// 深拷贝：分配与源相同的容量，只拷贝前 len 个元素
    fn clone(&self) -> Self {
        trace!(len = self.len, capacity = self.cap, "deep-copying buffer");
        let ptr = allocate_zeroed(self.cap);
        unsafe {
            // SAFETY: 新块容量为 cap >= len，两块互不重叠
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), ptr.as_ptr(), self.len);
        }
        Self {
            ptr,
            cap: self.cap,
            len: self.len,
        }
    }

    /// 拷贝赋值：先构造完整的新值，再替换自身，旧存储随之释放一次
    fn clone_from(&mut self, source: &Self) {
        trace!(len = source.len, "copy-assigning buffer");
        let fresh = source.clone();
        *self = fresh;
    }
}

impl Drop for IntBuffer {
    fn drop(&mut self) {
        trace!(capacity = self.cap, "releasing buffer");
        // SAFETY: ptr 来自 allocate_zeroed(cap)，drop 之后不再访问
        unsafe { release(self.ptr, self.cap) };
    }
}

impl Deref for IntBuffer {
    type Target = [i32];
    fn deref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl DerefMut for IntBuffer {
    fn deref_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}

impl Default for IntBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntBuffer")
            .field("len", &self.len)
            .field("capacity", &self.cap)
            .field("data", &self.as_slice())
            .finish()
    }
}

// 只比较逻辑内容，容量不参与
impl PartialEq for IntBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for IntBuffer {}

impl From<&[i32]> for IntBuffer {
    fn from(values: &[i32]) -> Self {
        let mut buffer = Self::new();
        for &value in values {
            buffer.push(value);
        }
        buffer
    }
}

#[cfg(test)]
mod tests;
