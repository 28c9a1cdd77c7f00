// Forwarders to defmt. Host unit tests run without a global logger, so there
// the arguments are only borrowed to keep them used.

macro_rules! trace {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(not(test))]
        defmt::trace!($fmt $(, $arg)*);
        #[cfg(test)]
        {
            $(let _ = &$arg;)*
        }
    }};
}

macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(not(test))]
        defmt::debug!($fmt $(, $arg)*);
        #[cfg(test)]
        {
            $(let _ = &$arg;)*
        }
    }};
}

macro_rules! info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(not(test))]
        defmt::info!($fmt $(, $arg)*);
        #[cfg(test)]
        {
            $(let _ = &$arg;)*
        }
    }};
}

macro_rules! warn {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(not(test))]
        defmt::warn!($fmt $(, $arg)*);
        #[cfg(test)]
        {
            $(let _ = &$arg;)*
        }
    }};
}
