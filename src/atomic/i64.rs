impl_atomic_int!(AtomicInt64, AtomicI64, i64);
