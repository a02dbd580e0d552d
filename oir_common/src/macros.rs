/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
//! small declarative-macro helpers in the teacher's `odin_common::macros`
//! idiom (kept to the handful this workspace actually uses).

/// flattens nested `if let` chains, mirroring the teacher's `if_let!`.
#[macro_export]
macro_rules! if_let {
    ( $p:pat = $e:expr => $body:block ) => {
        if let $p = $e {
            $body
        }
    };
    ( $p:pat = $e:expr, $($rest:tt)* ) => {
        if let $p = $e {
            $crate::if_let!( $($rest)* )
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn if_let_chains_match() {
        let a: Option<i32> = Some(1);
        let b: Option<i32> = Some(2);
        let mut sum = 0;
        if_let! {
            Some(x) = a,
            Some(y) = b => {
                sum = x + y;
            }
        }
        assert_eq!(sum, 3);
    }
}
