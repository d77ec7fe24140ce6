#![warn(missing_docs)]
//! Module for additional uom macros that facilitate the creation of path points or single unit values
/// helper macro to create the units
#[macro_export]
macro_rules! uom_unit_creator {

    ($unit:ident, $unit_type:ident, $val1:expr) => {
        $unit_type::new::<$unit>($val1)
    };
    ($unit:ident, $unit_type:ident, $val1:expr, $val2:expr) => {
        {
            use nalgebra::Point2;
        Point2::new(
            $unit_type::new::<$unit>($val1),
            $unit_type::new::<$unit>($val2))
        }

    };
    ($unit:ident, $unit_type:ident, $( $x:expr ),*) => {
        {
            use std::vec::Vec;
            let mut temp_vec = Vec::new();
            $(
                temp_vec.push($unit_type::new::<$unit>($x));
            )*
            temp_vec
        }
    };
}

///macro to create a Length in meter
#[macro_export]
macro_rules! meter {

    ($( $x:expr ),*) =>{
        {
            use uom::si::{f64::Length, length::meter};
            $crate::uom_unit_creator![meter, Length, $( $x ),*]
        }
    };
}
///macro to create a Length in millimeter
#[macro_export]
macro_rules! millimeter {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::millimeter};
        $crate::uom_unit_creator![millimeter, Length, $( $x ),*]
    }};
}
///macro to create a Length in micrometer
#[macro_export]
macro_rules! micrometer {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::micrometer};
        $crate::uom_unit_creator![micrometer, Length, $( $x ),*]
    }};
}
///macro to create a Length in nanometer
#[macro_export]
macro_rules! nanometer {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::nanometer};
        $crate::uom_unit_creator![nanometer, Length, $( $x ),*]
    }};
}

///macro to create an angle in radian
#[macro_export]
macro_rules! radian {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Angle, angle::radian};
        $crate::uom_unit_creator![radian, Angle, $( $x ),*]
    }};
}

///macro to create an angle in milliradian
#[macro_export]
macro_rules! milliradian {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Angle, angle::radian};
        $crate::uom_unit_creator![radian, Angle, $( 1e-3*$x ),*]
    }};
}

///macro to create an angle in degree
#[macro_export]
macro_rules! degree {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Angle, angle::degree};
        $crate::uom_unit_creator![degree, Angle, $( $x ),*]
    }};
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use nalgebra::Point2;
    use uom::si::{
        angle::radian,
        f64::Length,
        length::{meter, millimeter},
    };

    #[test]
    fn milliradian_test() {
        let rad = milliradian!(3.);
        assert_relative_eq!(rad.get::<radian>(), 3e-3);
    }
    #[test]
    fn degree_test() {
        let angle = degree!(180.0);
        assert_relative_eq!(angle.get::<radian>(), std::f64::consts::PI);
    }
    #[test]
    fn length_macros() {
        assert_relative_eq!(millimeter!(1.0).get::<meter>(), 1e-3);
        assert_relative_eq!(micrometer!(1.0).get::<millimeter>(), 1e-3);
        assert_relative_eq!(nanometer!(1.0).get::<millimeter>(), 1e-6);
    }
    #[test]
    fn uom_unit_creator() {
        let meter1 = Length::new::<meter>(1.);
        let meter2 = uom_unit_creator!(meter, Length, 1.);
        assert_relative_eq!(meter1.value, meter2.value);

        let meterp12 = Point2::new(Length::new::<meter>(1.), Length::new::<meter>(2.));
        let meterp22 = uom_unit_creator!(meter, Length, 1., 2.);
        assert_relative_eq!(meterp12.x.value, meterp22.x.value);
        assert_relative_eq!(meterp12.y.value, meterp22.y.value);

        let meterp13 = vec![
            Length::new::<meter>(1.),
            Length::new::<meter>(2.),
            Length::new::<meter>(3.),
        ];
        let meterp23 = uom_unit_creator!(meter, Length, 1., 2., 3.);
        assert_relative_eq!(meterp13[0].value, meterp23[0].value);
        assert_relative_eq!(meterp13[1].value, meterp23[1].value);
        assert_relative_eq!(meterp13[2].value, meterp23[2].value);
    }
}
