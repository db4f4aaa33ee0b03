// mut-casts in RawPtr are intentional and required.
#![allow(clippy::mut_from_ref)]

use core::ptr::NonNull;
use std::{
    cell::UnsafeCell,
    ops::{Deref, DerefMut},
    sync::OnceLock,
    thread::ThreadId,
};

// ----------------------------------------------
// RawPtr
// ----------------------------------------------

// Store a non-null raw pointer to a value owned elsewhere. This allows
// bypassing the language lifetime guarantees, so should be used with care:
// the pointee must outlive every use of the pointer.
pub struct RawPtr<T> {
    ptr: NonNull<T>,
}

impl<T> RawPtr<T> {
    #[inline]
    pub fn from_ref(reference: &T) -> Self {
        let ptr_mut = reference as *const T as *mut T;
        Self { ptr: NonNull::new(ptr_mut).unwrap() }
    }

    #[inline]
    pub fn from_mut(reference: &mut T) -> Self {
        let ptr_mut = reference as *mut T;
        Self { ptr: NonNull::new(ptr_mut).unwrap() }
    }

    // Pointee address. Stable for as long as the pointee stays put, which
    // makes it usable as an identity value.
    #[inline]
    pub fn addr(&self) -> usize {
        self.ptr.as_ptr() as usize
    }

    // Convert raw pointer to reference.
    // Pointer is never null but there are no guarantees about its lifetime.
    #[inline(always)]
    pub fn as_ref(&self) -> &T {
        unsafe { self.ptr.as_ref() }
    }

    // Convert raw pointer to mutable reference.
    // SAFETY: Caller must ensure there are no aliasing issues
    // (e.g. no other refs) and valid pointer lifetime.
    #[inline(always)]
    pub fn as_mut(&mut self) -> &mut T {
        unsafe { self.ptr.as_mut() }
    }

    // Cast from non mutable to mutable reference (const-cast).
    #[inline(always)]
    pub fn mut_ref_cast(&self) -> &mut T {
        unsafe { &mut *self.ptr.as_ptr() }
    }
}

// Implement Deref/DerefMut to allow `&*value` or `value.field` syntax.
impl<T> Deref for RawPtr<T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_ref()
    }
}

impl<T> DerefMut for RawPtr<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Caller must ensure exclusive access (no aliasing).
        self.as_mut()
    }
}

impl<T> Copy for RawPtr<T> {}
impl<T> Clone for RawPtr<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self // Just a cheap pointer copy.
    }
}

// ----------------------------------------------
// SingleThreadStatic
// ----------------------------------------------

// A single-threaded mutable global static variable.
// Safe as long as only one thread ever touches it.
// If another thread tries, it will panic (not UB).
// First thread to access the instance claims ownership.
pub struct SingleThreadStatic<T> {
    value: UnsafeCell<T>,
    owner: OnceLock<ThreadId>,
}

impl<T> SingleThreadStatic<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value: UnsafeCell::new(value), owner: OnceLock::new() }
    }

    #[inline]
    pub fn as_ref(&'static self) -> &'static T {
        self.assert_owner();
        unsafe { &*self.value.get() }
    }

    #[inline]
    pub fn as_mut(&'static self) -> &'static mut T {
        self.assert_owner();
        unsafe { &mut *self.value.get() }
    }

    fn assert_owner(&self) {
        if cfg!(debug_assertions) {
            let this_thread = std::thread::current().id();
            match self.owner.get() {
                Some(owner) if *owner == this_thread => {} // Same thread, no action.
                Some(_) => panic!("SingleThreadStatic accessed from non-owner thread!"),
                None => {
                    // First access claims ownership:
                    self.owner
                        .set(this_thread)
                        .unwrap_or_else(|_| panic!("Failed to set owner thread id!"));
                }
            }
        }
    }
}

// SAFETY: Safe to share references because we enforce single-threaded access
// with assert_owner().
unsafe impl<T> Sync for SingleThreadStatic<T> {}

// ----------------------------------------------
// Unit Tests
// ----------------------------------------------

#[test]
fn test_raw_ptr() {
    let mut value = 41;

    let ptr = RawPtr::from_mut(&mut value);
    assert_eq!(*ptr.as_ref(), 41);

    *ptr.mut_ref_cast() += 1;
    assert_eq!(*ptr, 42); // Deref.

    let mut copy = ptr;
    assert_eq!(copy.addr(), ptr.addr());

    *copy.as_mut() = 7;
    assert_eq!(*ptr.as_ref(), 7);
}

#[test]
fn test_single_thread_static() {
    static VALUE: SingleThreadStatic<i32> = SingleThreadStatic::new(0);

    *VALUE.as_mut() = 123;
    assert_eq!(*VALUE.as_ref(), 123);
}
