//! Host-based tests for the OTA update engine
//! These run on the development machine against a loopback TCP server and real files
