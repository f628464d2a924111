macro_rules! trace {
    ( @event $event:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@event: {:?}", $event);
    };

    ( @scan $descr:expr, $pos:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!(">{}: {}", $descr, $pos);
    };
}
