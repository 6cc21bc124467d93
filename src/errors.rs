//
// Copyright 2016 The Cartographer Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io;

error_chain! {
    foreign_links {
        Json(serde_json::Error);
        Io(io::Error);
    }

    errors {
        InvalidPointCloudLength(len: usize) {
            description("point cloud length is not a multiple of 3")
            display("A point cloud is a flat list of x, y, z triples, but it has {} values.", len)
        }
        InvalidMatrixLength(len: usize) {
            description("matrix does not have 16 values")
            display("A 4x4 matrix needs exactly 16 values in column-major order, got {}.", len)
        }
        InvalidResolution(width: f64, height: f64) {
            description("invalid viewport resolution")
            display("Resolution must be finite and positive, got {}x{}.", width, height)
        }
        InvalidCamera(reason: String) {
            description("invalid camera")
            display("Invalid camera: {}", reason)
        }
    }
}
