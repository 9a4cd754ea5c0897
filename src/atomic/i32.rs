impl_atomic_int!(AtomicInt32, AtomicI32, i32);
