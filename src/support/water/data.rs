//! Reference data for [`super`], sorted by temperature (°C).

use super::table::PropertyTable;

/// Water density, g/cm³.
pub(super) static DENSITY: PropertyTable = PropertyTable::new(&[
    (1.6, 0.99993),
    (4.0, 0.99997),
    (5.0, 0.99997),
    (6.0, 0.99997),
    (7.0, 0.99998),
    (8.0, 0.99999),
    (9.0, 0.9998),
    (10.0, 0.9997),
    (11.0, 0.9996),
    (12.0, 0.9995),
    (13.0, 0.9994),
    (14.0, 0.9992),
    (15.0, 0.9991),
    (16.0, 0.9989),
    (17.0, 0.9988),
    (18.0, 0.9986),
    (19.0, 0.9984),
    (20.0, 0.9982),
    (21.0, 0.998),
    (22.0, 0.9978),
    (23.0, 0.9975),
    (24.0, 0.9973),
    (25.0, 0.997),
    (26.0, 0.9968),
    (27.0, 0.9965),
    (28.0, 0.9962),
    (29.0, 0.9959),
    (30.0, 0.9956),
    (31.0, 0.9953),
    (32.0, 0.995),
    (33.0, 0.9947),
    (34.0, 0.9944),
    (35.0, 0.994),
    (36.0, 0.9937),
    (37.0, 0.9933),
    (38.0, 0.993),
    (39.0, 0.9926),
    (40.0, 0.9922),
    (45.0, 0.9902),
    (50.0, 0.988),
    (55.0, 0.9857),
    (60.0, 0.9832),
    (65.0, 0.9806),
    (70.0, 0.9778),
    (75.0, 0.9748),
    (80.0, 0.9718),
]);

/// Water dynamic viscosity, mPa·s.
pub(super) static DYNAMIC_VISCOSITY: PropertyTable = PropertyTable::new(&[
    (1.6, 1.6736),
    (4.0, 1.5674),
    (5.0, 1.5182),
    (6.0, 1.4716),
    (7.0, 1.4272),
    (8.0, 1.3849),
    (9.0, 1.3447),
    (10.0, 1.3063),
    (11.0, 1.2696),
    (12.0, 1.2347),
    (13.0, 1.2012),
    (14.0, 1.1692),
    (15.0, 1.1386),
    (16.0, 1.1092),
    (17.0, 1.0811),
    (18.0, 1.0541),
    (19.0, 1.0282),
    (20.0, 1.0016),
    (21.0, 0.9775),
    (22.0, 0.9544),
    (23.0, 0.9321),
    (24.0, 0.9107),
    (25.0, 0.8900),
    (26.0, 0.8701),
    (27.0, 0.8509),
    (28.0, 0.8324),
    (29.0, 0.8145),
    (30.0, 0.7972),
    (31.0, 0.7805),
    (32.0, 0.7644),
    (33.0, 0.7488),
    (34.0, 0.7337),
    (35.0, 0.7191),
    (36.0, 0.7050),
    (37.0, 0.6913),
    (38.0, 0.6780),
    (39.0, 0.6652),
    (40.0, 0.6527),
    (45.0, 0.5958),
    (50.0, 0.5465),
    (55.0, 0.5036),
    (60.0, 0.4660),
    (65.0, 0.4329),
    (70.0, 0.4035),
    (75.0, 0.3774),
    (80.0, 0.3540),
]);

/// Water kinematic viscosity, mm²/s.
pub(super) static KINEMATIC_VISCOSITY: PropertyTable = PropertyTable::new(&[
    (1.6, 1.6735),
    (4.0, 1.5673),
    (5.0, 1.5182),
    (6.0, 1.4715),
    (7.0, 1.4271),
    (8.0, 1.3847),
    (9.0, 1.3444),
    (10.0, 1.3059),
    (11.0, 1.2692),
    (12.0, 1.2341),
    (13.0, 1.2005),
    (14.0, 1.1683),
    (15.0, 1.1375),
    (16.0, 1.1081),
    (17.0, 1.0798),
    (18.0, 1.0526),
    (19.0, 1.0266),
    (20.0, 1.0034),
    (21.0, 0.9795),
    (22.0, 0.9565),
    (23.0, 0.9344),
    (24.0, 0.9131),
    (25.0, 0.8926),
    (26.0, 0.8729),
    (27.0, 0.8539),
    (28.0, 0.8355),
    (29.0, 0.8178),
    (30.0, 0.8007),
    (31.0, 0.7842),
    (32.0, 0.7682),
    (33.0, 0.7528),
    (34.0, 0.7379),
    (35.0, 0.7234),
    (36.0, 0.7095),
    (37.0, 0.6959),
    (38.0, 0.6828),
    (39.0, 0.6702),
    (40.0, 0.6579),
    (45.0, 0.5958),
    (50.0, 0.5531),
    (55.0, 0.5109),
    (60.0, 0.4740),
    (65.0, 0.4329),
    (70.0, 0.4127),
    (75.0, 0.3872),
    (80.0, 0.3643),
]);
