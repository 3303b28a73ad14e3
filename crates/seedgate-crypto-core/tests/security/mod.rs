mod timing_sidechannel;
mod zeroize_on_drop;
