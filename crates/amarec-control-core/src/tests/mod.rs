mod destination;
mod fakes;
mod transcode;
